fn main() -> std::process::ExitCode {
    xcarchive_export_options::manual_cli_main()
}

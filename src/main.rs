fn main() -> std::process::ExitCode {
    xcarchive_export_options::cli_main()
}

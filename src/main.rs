fn main() -> anyhow::Result<()> {
    ws_shell::run_app()
}

fn main() -> anyhow::Result<()> {
    trainboard_client_lib::run()
}

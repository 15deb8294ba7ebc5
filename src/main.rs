fn main() -> anyhow::Result<()> {
    caffeine_dose_lib::run()
}

use anyhow::Result;

fn main() -> Result<()> {
    flaticon_search::run()
}

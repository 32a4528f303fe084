use osrelease::load;

fn main() -> anyhow::Result<()> {
    let osr = load()?;

    for key in ["ID", "NAME", "VERSION_CODENAME"] {
        println!(
            "{}={}",
            key,
            osr.get(key).map(String::as_str).unwrap_or("<missing>")
        );
    }
    Ok(())
}

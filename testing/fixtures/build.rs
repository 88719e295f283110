fn main() -> Result<(), Box<dyn std::error::Error>> {
    mutlog::build!("src/acme.rs", "Acme");

    Ok(())
}

use anyhow::Result;
use mediatag_core::Library;

pub fn run(library: &Library, json: bool) -> Result<()> {
    let stats = library.status()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Catalog status");
    println!("  performers: {}", stats.performers);
    println!("  tags:       {}", stats.tags);
    println!("  studios:    {}", stats.studios);
    println!("  scenes:     {}", stats.scenes);
    println!("  images:     {}", stats.images);
    println!("  galleries:  {}", stats.galleries);
    println!("  organized:  {}", stats.organized);
    Ok(())
}

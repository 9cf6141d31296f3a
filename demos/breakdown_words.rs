use tamara_rs::BreakdownEngine;

fn main() -> tamara_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let engine = BreakdownEngine::new()?;
    let words = [
        "chat", "maison", "oiseau", "enfant", "exemple", "grand-père", "l'ami", "monsieur",
        "le petit chat", "año", "straße",
    ];

    println!("=== French breakdown ===");
    for word in words {
        match engine.breakdown(word) {
            Ok(result) => {
                let symbols: Vec<String> = result.symbols().iter().map(|s| s.to_string()).collect();
                println!("{word}: {result}  [{}]", symbols.join(" "));
            }
            Err(err) => println!("{word}: error: {err}"),
        }
    }
    Ok(())
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let schema = testscope_gradle::model::snapshot_schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

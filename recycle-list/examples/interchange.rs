// Example: loading records from their JSON interchange form.
use recycle_list::interchange::{records_from_json, records_to_json};

fn main() -> Result<(), recycle_list::ListError> {
    let json = r#"[
        {"number": 1, "name": "Button[1]", "description": "Description[1]"},
        {"number": 2, "name": "Button[2]"}
    ]"#;

    let records = records_from_json(json)?;
    println!("decoded {} records: {records:?}", records.len());
    println!("encoded: {}", records_to_json(&records)?);
    Ok(())
}

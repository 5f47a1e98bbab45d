use arbor_core::error::ArborError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), ArborError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

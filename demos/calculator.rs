//! Register a few tools, print the manifest, and dispatch by name.
//!
//! Run with `cargo run --example calculator`.

use anyhow::Result;
use serde_json::json;
use toolsig::{FnTool, Primitive, Registry, TypeDescriptor, description, wrap};

fn int_with(desc: &str) -> TypeDescriptor {
    TypeDescriptor::annotated(
        TypeDescriptor::Primitive(Primitive::Integer),
        [description(desc)],
    )
}

fn main() -> Result<()> {
    let add = wrap(
        FnTool::new("add", |args| {
            let x = args["x"].as_i64().unwrap_or_default();
            let y = args["y"].as_i64().unwrap_or_default();
            Ok(json!(x + y))
        })
        .doc("Adds two integers.")
        .param("x", int_with("left operand"))
        .param("y", int_with("right operand")),
    )?;

    let multiply = wrap(
        FnTool::new("multiply", |args| {
            let x = args["x"].as_i64().unwrap_or_default();
            let y = args["y"].as_i64().unwrap_or_default();
            Ok(json!(x * y))
        })
        .doc("Multiplies two integers.")
        .param("x", int_with("left operand"))
        .param("y", int_with("right operand")),
    )?;

    let greet = wrap(
        FnTool::new("greet", |args| {
            Ok(json!(format!("Hello, {}!", args["name"].as_str().unwrap_or("stranger"))))
        })
        .doc("Returns a greeting message.")
        .param("name", TypeDescriptor::Primitive(Primitive::String)),
    )?;

    let registry = Registry::new([add, multiply, greet]);

    println!("manifest:");
    println!("{}", serde_json::to_string_pretty(&registry.manifest())?);

    println!("add(3, 4)       = {}", registry.call("add", json!({"x": 3, "y": 4}))?);
    println!("multiply(3, 4)  = {}", registry.call("multiply", json!({"x": 3, "y": 4}))?);
    println!("greet(\"Alice\")  = {}", registry.call_json("greet", r#"{"name": "Alice"}"#)?);

    Ok(())
}

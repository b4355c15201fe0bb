#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A sandboxed invocation: data and config both live under `temp`.
fn farm2home_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("farm2home"));
    cmd.env("FARM2HOME_DATA", temp.path().join("data"))
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env("HOME", temp.path())
        .env_remove("FARM2HOME_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn register_ravi(temp: &TempDir) {
    farm2home_cmd(temp)
        .args([
            "farmers",
            "register",
            "--name",
            "Ravi",
            "--mobile",
            "9876543210",
            "--location",
            "Hosur",
            "--crops",
            "Tomato, Brinjal",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Farmer registered successfully!"));
}

fn first_farmer_id(temp: &TempDir) -> String {
    let output = farm2home_cmd(temp)
        .args(["farmers", "list"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let start = stdout.find('[').unwrap() + 1;
    let end = stdout.find(']').unwrap();
    stdout[start..end].to_string()
}

#[test]
fn test_products_list_and_filter() {
    let temp = TempDir::new().unwrap();

    farm2home_cmd(&temp)
        .args(["products"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tomatoes"))
        .stdout(predicate::str::contains("₹55 /L"));

    farm2home_cmd(&temp)
        .args(["products", "--category", "dairy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Milk"))
        .stdout(predicate::str::contains("Tomatoes").not());
}

#[test]
fn test_product_details() {
    let temp = TempDir::new().unwrap();

    farm2home_cmd(&temp)
        .args(["products", "show", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product details: Mangoes - ₹99 /kg"));

    farm2home_cmd(&temp)
        .args(["products", "show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product not found: 42"));
}

#[test]
fn test_remove_missing_cart_entry_warns() {
    let temp = TempDir::new().unwrap();

    farm2home_cmd(&temp)
        .args(["cart", "remove", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product 2 is not in the cart"));
}

#[test]
fn test_unknown_category_fails() {
    let temp = TempDir::new().unwrap();

    farm2home_cmd(&temp)
        .args(["products", "--category", "Toys"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category 'Toys'"));
}

#[test]
fn test_cart_add_twice_persists_across_runs() {
    let temp = TempDir::new().unwrap();

    farm2home_cmd(&temp)
        .args(["cart", "add", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Tomatoes to cart (x1)"));

    farm2home_cmd(&temp)
        .args(["cart", "add", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Tomatoes to cart (x2)"));

    farm2home_cmd(&temp)
        .args(["cart", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cart (2 items):"));

    let raw = fs::read_to_string(temp.path().join("data").join("farm2home_cart.json")).unwrap();
    assert!(raw.contains("\"quantity\":2"));
    assert!(raw.contains("\"img\""));
}

#[test]
fn test_cart_add_unknown_product_fails() {
    let temp = TempDir::new().unwrap();

    farm2home_cmd(&temp)
        .args(["cart", "add", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product not found: 99"));
}

#[test]
fn test_empty_cart_message() {
    let temp = TempDir::new().unwrap();

    farm2home_cmd(&temp)
        .args(["cart", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your cart is empty!"));
}

#[test]
fn test_register_invalid_reports_every_field() {
    let temp = TempDir::new().unwrap();

    farm2home_cmd(&temp)
        .args(["farmers", "register", "--name", "Ravi", "--mobile", "12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Enter a valid 10-digit Indian mobile"))
        .stderr(predicate::str::contains("Location is required"))
        .stderr(predicate::str::contains("Main crops are required"))
        .stderr(predicate::str::contains("Name is required").not());

    farm2home_cmd(&temp)
        .args(["farmers", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No farmers registered yet"));
}

#[test]
fn test_register_then_list() {
    let temp = TempDir::new().unwrap();
    register_ravi(&temp);

    farm2home_cmd(&temp)
        .args(["farmers", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ravi"))
        .stdout(predicate::str::contains("Crops: Tomato, Brinjal"));
}

#[test]
fn test_remove_farmer_declined() {
    let temp = TempDir::new().unwrap();
    register_ravi(&temp);
    let id = first_farmer_id(&temp);

    farm2home_cmd(&temp)
        .args(["farmers", "remove", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled"))
        .stderr(predicate::str::contains("Remove this farmer from the list? [y/N]"));

    farm2home_cmd(&temp)
        .args(["farmers", "list"])
        .assert()
        .stdout(predicate::str::contains("Ravi"));
}

#[test]
fn test_remove_farmer_with_yes() {
    let temp = TempDir::new().unwrap();
    register_ravi(&temp);
    let id = first_farmer_id(&temp);

    farm2home_cmd(&temp)
        .args(["farmers", "remove", &id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed farmer: Ravi (Hosur)"));

    farm2home_cmd(&temp)
        .args(["farmers", "list"])
        .assert()
        .stdout(predicate::str::contains("No farmers registered yet"));
}

#[test]
fn test_reset_clears_everything() {
    let temp = TempDir::new().unwrap();
    register_ravi(&temp);
    farm2home_cmd(&temp).args(["cart", "add", "4"]).assert().success();

    farm2home_cmd(&temp)
        .args(["reset"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Cleared 1 cart item(s) and 1 farmer record(s)",
        ));

    assert!(!temp.path().join("data").join("farm2home_cart.json").exists());
    farm2home_cmd(&temp)
        .args(["cart", "show"])
        .assert()
        .stdout(predicate::str::contains("Your cart is empty!"));
}

#[test]
fn test_corrupt_cart_file_is_tolerated() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("farm2home_cart.json"), "{not json").unwrap();

    farm2home_cmd(&temp)
        .args(["cart", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your cart is empty!"));
}

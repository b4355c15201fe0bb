use farm2homeapp::api::{CartSummary, Farm2HomeApi};
use farm2homeapp::error::Farm2HomeError;
use farm2homeapp::model::FarmerInput;
use farm2homeapp::store::fs_backend::FsBackend;
use farm2homeapp::store::{CART_KEY, FARMERS_KEY};
use farm2homeapp::validation::Field;
use std::fs;
use tempfile::TempDir;

fn open(dir: &TempDir) -> Farm2HomeApi<FsBackend> {
    Farm2HomeApi::new(FsBackend::new(dir.path().to_path_buf()))
}

#[test]
fn test_cart_scenario_survives_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut api = open(&dir);
        api.add_to_cart(1).unwrap();
        api.add_to_cart(1).unwrap();
        assert_eq!(api.cart().total_item_count(), 2);
    }

    let api = open(&dir);
    let entries = api.cart().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].product.name, "Tomatoes");
    assert_eq!(entries[0].quantity, 2);
    assert!(matches!(
        api.view_cart().unwrap().cart_summary,
        Some(CartSummary::Items { total_items: 2, .. })
    ));
}

#[test]
fn test_registration_scenario_survives_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut api = open(&dir);
        api.register_farmer(&FarmerInput::new("Ravi", "9876543210", "Hosur", "Tomato"))
            .unwrap();

        let err = api
            .register_farmer(&FarmerInput::new("", "123", "", ""))
            .unwrap_err();
        match err {
            Farm2HomeError::Validation(errors) => {
                assert_eq!(errors.len(), 4);
                assert!(errors.contains(Field::Mobile));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
        assert_eq!(api.farmers().count(), 1);
    }

    let api = open(&dir);
    assert_eq!(api.farmers().count(), 1);
    assert_eq!(api.farmers().list()[0].name, "Ravi");
}

#[test]
fn test_corrupt_files_start_empty_and_are_overwritten() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(format!("{}.json", CART_KEY)), "not json").unwrap();
    fs::write(dir.path().join(format!("{}.json", FARMERS_KEY)), "{\"oops\":true}").unwrap();

    let mut api = open(&dir);
    assert_eq!(api.cart().total_item_count(), 0);
    assert_eq!(api.farmers().count(), 0);

    api.add_to_cart(7).unwrap();
    let raw = fs::read_to_string(dir.path().join(format!("{}.json", CART_KEY))).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["name"], "Leafy Greens");
    assert_eq!(value[0]["quantity"], 1);
}

#[test]
fn test_reset_removes_files() {
    let dir = TempDir::new().unwrap();
    let mut api = open(&dir);
    api.add_to_cart(2).unwrap();
    api.register_farmer(&FarmerInput::new("Ravi", "9876543210", "Hosur", "Tomato"))
        .unwrap();

    api.reset().unwrap();

    assert!(!dir.path().join(format!("{}.json", CART_KEY)).exists());
    assert!(!dir.path().join(format!("{}.json", FARMERS_KEY)).exists());
}

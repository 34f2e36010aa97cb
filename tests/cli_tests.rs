use json_dart::cli::{write_output, InputSettings};
use json_dart::Error;

#[test]
fn writes_snake_case_dart_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_output(dir.path(), "CartModule", "class CartModule {}", false).unwrap();
    assert_eq!(path, dir.path().join("cart_module.dart"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "class CartModule {}");
}

#[test]
fn refuses_to_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();
    write_output(dir.path(), "User", "old", false).unwrap();

    let err = write_output(dir.path(), "User", "new", false).unwrap_err();
    assert!(matches!(err, Error::OutputExists(_)));
    assert_eq!(std::fs::read_to_string(dir.path().join("user.dart")).unwrap(), "old");

    write_output(dir.path(), "User", "new", true).unwrap();
    assert_eq!(std::fs::read_to_string(dir.path().join("user.dart")).unwrap(), "new");
}

#[test]
fn creates_missing_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("lib").join("models");
    let path = write_output(&nested, "Order", "class Order {}", false).unwrap();
    assert!(path.exists());
}

#[test]
fn loads_file_with_pointer() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("sample.json");
    std::fs::write(&file, r#"{"data": {"items": [{"id": 1, "price": 2.5}]}}"#).unwrap();

    let settings = InputSettings {
        class_name: "Item".into(),
        input: file.to_string_lossy().into_owned(),
        json_pointer: Some("/data/items".into()),
    };
    let (value, hints) = settings.load().unwrap();
    assert!(value.is_array());
    assert_eq!(hints.get("price"), Some(json_dart::NumKind::Double));

    let dart = json_dart::generate(&settings.class_name, &value, &hints).unwrap();
    assert!(dart.contains("  int? id;\n  double? price;\n"));
}

#[test]
fn missing_input_file_is_io_error() {
    let settings = InputSettings {
        class_name: "Item".into(),
        input: "/definitely/not/here.json".into(),
        json_pointer: None,
    };
    assert!(matches!(settings.load(), Err(Error::Io { .. })));
}

#[test]
fn invalid_class_name_checked_before_reading() {
    let settings = InputSettings {
        class_name: "item".into(),
        input: "/definitely/not/here.json".into(),
        json_pointer: None,
    };
    assert!(matches!(settings.load(), Err(Error::InvalidClassName(_))));
}

use super::*;
use crate::types::{Attribute, Product};

fn attr(id: i64, option: &str) -> Attribute {
    Attribute {
        id,
        name: None,
        options: vec![option.to_owned()],
    }
}

fn make_product(name: &str, attributes: Vec<Attribute>) -> Product {
    Product {
        id: 1,
        name: name.to_owned(),
        regular_price: "12.50".to_owned(),
        stock_quantity: None,
        permalink: String::new(),
        catalog_visibility: "visible".to_owned(),
        status: "publish".to_owned(),
        attributes,
        meta_data: vec![],
    }
}

fn normalize(name: &str, attributes: Vec<Attribute>) -> String {
    normalize_name(&make_product(name, attributes), &AttributeRoles::default()).unwrap()
}

#[test]
fn domain_moves_to_front_and_vintage_to_end() {
    let name = normalize("Chateau-Test", vec![attr(1, "Chateau"), attr(6, "2019")]);
    assert_eq!(name, "Chateau Test 2019");
}

#[test]
fn hyphens_are_deleted_not_replaced() {
    assert_eq!(normalize("Saint-Julien", vec![]), "SaintJulien NV");
}

#[test]
fn vintage_is_cut_from_the_middle_of_the_name() {
    let name = normalize(
        "Barolo 2016 Domaine Rossi",
        vec![attr(1, "Domaine Rossi"), attr(6, "2016")],
    );
    assert_eq!(name, "Domaine Rossi Barolo 2016");
}

#[test]
fn missing_vintage_attribute_appends_nv() {
    assert_eq!(normalize("Rioja Crianza", vec![]), "Rioja Crianza NV");
}

#[test]
fn non_vintage_marker_becomes_nv() {
    assert_eq!(
        normalize("Cava Brut", vec![attr(6, "N.V.")]),
        "Cava Brut NV"
    );
    assert_eq!(
        normalize("Cava Brut N.V.", vec![attr(6, "N.V.")]),
        "Cava Brut NV"
    );
}

#[test]
fn domain_absent_from_name_is_ignored() {
    let name = normalize("Rioja Crianza", vec![attr(1, "Bodegas Ontañón"), attr(6, "2018")]);
    assert_eq!(name, "Rioja Crianza 2018");
}

#[test]
fn classification_absent_from_name_is_appended() {
    let name = normalize("Rioja", vec![attr(2, "Reserva"), attr(6, "2015")]);
    assert_eq!(name, "Rioja Reserva 2015");
}

#[test]
fn classification_already_in_name_is_left_in_place() {
    let name = normalize("Reserva Rioja", vec![attr(2, "Reserva"), attr(6, "2015")]);
    assert_eq!(name, "Reserva Rioja 2015");
}

#[test]
fn all_roles_combined() {
    let name = normalize(
        "Crianza 2017 - Bodegas Lan",
        vec![
            attr(2, "DOCa"),
            attr(3, "Tempranillo"),
            attr(1, "Bodegas Lan"),
            attr(6, "2017"),
        ],
    );
    assert_eq!(name, "Bodegas Lan Crianza DOCa 2017");
}

#[test]
fn grape_attribute_does_not_change_the_name() {
    assert_eq!(
        normalize("Rioja", vec![attr(3, "Tempranillo")]),
        "Rioja NV"
    );
}

#[test]
fn first_attribute_with_a_role_wins() {
    let name = normalize("Rioja", vec![attr(6, "2019"), attr(6, "2020")]);
    assert_eq!(name, "Rioja 2019");
}

#[test]
fn empty_domain_value_is_not_treated_as_found() {
    assert_eq!(normalize("Rioja", vec![attr(1, "")]), "Rioja NV");
}

#[test]
fn already_normalized_name_gains_a_second_suffix() {
    // Re-running on output is not a fixed point; only one pass is meaningful.
    assert_eq!(normalize("Rioja NV", vec![]), "Rioja NV NV");
}

#[test]
fn custom_role_table_is_used() {
    let roles = AttributeRoles {
        vintage_year: 9,
        ..AttributeRoles::default()
    };
    let product = make_product("Rioja 2014", vec![attr(9, "2014"), attr(6, "1999")]);
    assert_eq!(normalize_name(&product, &roles).unwrap(), "Rioja 2014");
}

#[test]
fn role_attribute_without_options_is_an_error() {
    let product = make_product(
        "Rioja",
        vec![Attribute {
            id: 6,
            name: Some("Jaar".to_owned()),
            options: vec![],
        }],
    );
    let err = normalize_name(&product, &AttributeRoles::default()).unwrap_err();
    assert!(
        matches!(err, StoreError::Normalization { ref raw_name, .. } if raw_name == "Rioja"),
        "expected Normalization error, got: {err:?}"
    );
}

//! End-to-end scenarios against a freshly seeded inventory.

use partstock_inventory::{
    Decimal, InventoryService, Part, PartForm, PartId, PartKind, PartSource, ProductForm,
    ProductId, StockLevels,
};

fn bolts(id: PartId) -> Part {
    Part::new(
        id,
        "Bolts",
        Decimal::new(99, 2),
        StockLevels::new(50, 10, 100).unwrap(),
        PartSource::InHouse { machine_id: 42 },
    )
}

#[test]
fn allocate_then_add_then_find() {
    let mut inventory = InventoryService::seeded();

    let first = inventory.next_unique_part_id().unwrap();
    assert_eq!(first, PartId::new(1006));
    assert_eq!(inventory.next_unique_part_id().unwrap(), PartId::new(1007));

    inventory.add_part(bolts(first));
    let found = inventory.find_part_by_id(PartId::new(1006)).unwrap();
    assert_eq!(found, &bolts(PartId::new(1006)));
    assert_eq!(found.machine_id(), Some(42));
}

#[test]
fn product_with_associated_part_survives_delete() {
    let mut inventory = InventoryService::seeded();
    let id = inventory.next_unique_part_id().unwrap();
    inventory.add_part(bolts(id));

    inventory.associate_part(ProductId::new(5001), id).unwrap();
    let boats = inventory.find_product_by_id(ProductId::new(5001)).cloned().unwrap();

    assert!(!inventory.delete_product(&boats));
    assert!(
        inventory
            .all_products()
            .iter()
            .any(|p| p.id_typed() == ProductId::new(5001))
    );
}

#[test]
fn deleted_id_is_not_reused() {
    let mut inventory = InventoryService::seeded();
    let form = PartForm {
        kind: PartKind::Outsourced,
        name: "Nuts".to_string(),
        price: "0.10".to_string(),
        stock: "5".to_string(),
        min: "0".to_string(),
        max: "10".to_string(),
        source: "Acme".to_string(),
    };

    let id = inventory.create_part(&form).unwrap();
    assert_eq!(id, PartId::new(1006));
    let nuts = inventory.find_part_by_id(id).cloned().unwrap();
    assert!(inventory.delete_part(&nuts));

    assert_eq!(inventory.create_part(&form).unwrap(), PartId::new(1007));
}

#[test]
fn name_search_edges() {
    let inventory = InventoryService::seeded();

    let all: Vec<u32> = inventory
        .find_parts_by_name("")
        .iter()
        .map(|p| p.id_typed().get())
        .collect();
    assert_eq!(all, vec![1001, 1002, 1003, 1004, 1005]);

    assert!(inventory.find_parts_by_name("zzz-no-match").is_empty());
    assert!(inventory.find_products_by_name("zzz-no-match").is_empty());
}

#[test]
fn rejected_creates_leave_inventory_untouched() {
    let mut inventory = InventoryService::seeded();
    let valid = ProductForm {
        name: "Moon Boots".to_string(),
        price: "49.95".to_string(),
        stock: "3".to_string(),
        min: "1".to_string(),
        max: "9".to_string(),
    };

    let inverted = ProductForm {
        min: "10".to_string(),
        ..valid.clone()
    };
    let too_low = ProductForm {
        stock: "0".to_string(),
        ..valid.clone()
    };
    let not_a_number = ProductForm {
        price: "free".to_string(),
        ..valid.clone()
    };

    for form in [&inverted, &too_low, &not_a_number] {
        let err = inventory.create_product(form, &[]).unwrap_err();
        assert!(err.is_validation(), "{form:?}");
    }
    assert_eq!(inventory.all_products().len(), 3);

    let id = inventory.create_product(&valid, &[]).unwrap();
    assert_eq!(id, ProductId::new(5004));
    let stored = inventory.find_product_by_id(id).unwrap();
    assert_eq!(stored.price(), Decimal::new(4995, 2));
    assert_eq!((stored.stock(), stored.min(), stored.max()), (3, 1, 9));
}

#[test]
fn empty_product_deletes_cleanly() {
    let mut inventory = InventoryService::seeded();
    let sculptures = inventory.all_products()[2].clone();

    assert!(inventory.delete_product(&sculptures));
    let remaining: Vec<u32> = inventory
        .all_products()
        .iter()
        .map(|p| p.id_typed().get())
        .collect();
    assert_eq!(remaining, vec![5001, 5002]);
}

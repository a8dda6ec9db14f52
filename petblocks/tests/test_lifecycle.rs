#![allow(missing_docs)]

use std::sync::Arc;

use petblocks::abi::layout::{fields, mapped};
use petblocks::abi::{HostImage, MemoryImage, NamespacedKey};
use petblocks::lifecycle::{self, EnableError};
use petblocks::registry::ProbeError;

fn mapped_host() -> MemoryImage {
    let mut image = MemoryImage::new("net.minecraft.server.v1_8_R1");
    image.install_mapped_registry();
    for class in ["CustomRabbit", "CustomHorse", "CustomZombie"] {
        image.define_class(format!("com.github.petblocks.nms.v1_8_R1.{class}"));
    }
    image
}

#[test]
fn enable_then_disable_restores_a_mapped_host() {
    let image = Arc::new(mapped_host());

    let mut registrar = lifecycle::enable(image.clone()).unwrap();
    assert_eq!(registrar.registered_count(), 3);

    let registry_class = image
        .class("net.minecraft.server.v1_8_R1.EntityTypes")
        .unwrap();
    let name_to_class = image
        .static_field(&registry_class, fields::mapped::NAME_TO_CLASS)
        .unwrap()
        .downcast::<mapped::NameToClass>()
        .unwrap_or_else(|_| panic!("name mapping does not have the expected layout"));
    assert_eq!(name_to_class.read().unwrap().len(), 3);

    lifecycle::disable(&mut registrar);
    assert_eq!(registrar.registered_count(), 0);
    assert!(name_to_class.read().unwrap().is_empty());
}

#[test]
fn enable_then_disable_restores_a_keyed_host() {
    let mut image = MemoryImage::new("net.minecraft.server.v1_12_R1");
    let registry = image.install_keyed_registry();
    for class in ["CustomRabbit", "CustomHorse", "CustomZombie"] {
        image.define_class(format!("com.github.petblocks.nms.v1_12_R1.{class}"));
    }

    let mut registrar = lifecycle::enable(Arc::new(image)).unwrap();
    assert_eq!(registrar.registered_count(), 3);
    assert_eq!(registry.len(), 3);
    assert!(registry.get(&NamespacedKey::new("PetBlocks", "Rabbit")).is_some());
    assert!(registry.get(&NamespacedKey::new("PetBlocks", "Horse")).is_some());
    assert!(registry.get(&NamespacedKey::new("PetBlocks", "Zombie")).is_some());

    lifecycle::disable(&mut registrar);
    assert!(registry.is_empty());
}

#[test]
fn missing_custom_classes_degrade_to_warnings() {
    let mut image = MemoryImage::new("net.minecraft.server.v1_8_R1");
    image.install_mapped_registry();
    // Only the rabbit's custom class ships on this host.
    image.define_class("com.github.petblocks.nms.v1_8_R1.CustomRabbit");

    testing_logger::setup();
    let registrar = lifecycle::enable(Arc::new(image)).unwrap();
    assert_eq!(registrar.registered_count(), 1);

    testing_logger::validate(|captured| {
        let warnings = captured
            .iter()
            .filter(|entry| entry.level == log::Level::Warn)
            .count();
        assert_eq!(warnings, 2);
    });
}

#[test]
fn undetectable_hosts_fail_enable() {
    let image = Arc::new(MemoryImage::without_package());
    assert_eq!(
        lifecycle::enable(image).err(),
        Some(EnableError::Probe(ProbeError::PackageUnavailable))
    );
}

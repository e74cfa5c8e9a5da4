//! Fixed ingredient catalog served by the fake.

use burger_api::{Ingredient, Ingredients};

const CATALOG: [(&str, &str, i64, &str); 15] = [
    ("61c0c5a71d1f82001bdaaa6d", "Fluorescent bun R2-D3", 988, "bun"),
    ("61c0c5a71d1f82001bdaaa6f", "Immortelle mollusk meat Protostomia", 1337, "main"),
    ("61c0c5a71d1f82001bdaaa70", "Beef meteorite (forged)", 3000, "main"),
    ("61c0c5a71d1f82001bdaaa71", "Luminous tetraodontiform tree fruit", 424, "main"),
    ("61c0c5a71d1f82001bdaaa72", "Spicy-X sauce", 90, "sauce"),
    ("61c0c5a71d1f82001bdaaa6e", "Bio-cutlet from Martian Magnolia", 424, "main"),
    ("61c0c5a71d1f82001bdaaa73", "Space sauce", 80, "sauce"),
    ("61c0c5a71d1f82001bdaaa74", "Traditional galactic sauce", 15, "sauce"),
    ("61c0c5a71d1f82001bdaaa6c", "Crater bun N-200i", 1255, "bun"),
    ("61c0c5a71d1f82001bdaaa75", "Antarian flat-footed thingy sauce", 88, "sauce"),
    ("61c0c5a71d1f82001bdaaa76", "Mini-salad Exo-Plantago", 4400, "main"),
    ("61c0c5a71d1f82001bdaaa77", "Crisp mineral rings", 300, "main"),
    ("61c0c5a71d1f82001bdaaa78", "Falleniansky crystals", 3000, "main"),
    ("61c0c5a71d1f82001bdaaa79", "Alpha-saturn cheese with mold", 4142, "main"),
    ("61c0c5a71d1f82001bdaaa7a", "Martian Alpha-Sedan salad leaves", 2500, "main"),
];

pub fn default_catalog() -> Ingredients {
    Ingredients::new(
        CATALOG
            .iter()
            .map(|(id, name, price, kind)| Ingredient::new(*id, *name, *price, *kind))
            .collect(),
    )
}

/// Whether `id` has the shape of a 24 hex digit object id.
pub fn is_object_id(id: &str) -> bool {
    id.len() == 24 && id.chars().all(|c| c.is_ascii_hexdigit())
}

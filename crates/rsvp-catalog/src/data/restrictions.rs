use super::{EntryDef, def};

pub(crate) const DIETARY_TYPE: &[EntryDef] = &[
    def(
        "omnivore",
        ["Omnívoro", "Omnivore", "Omnivore"],
        &["sin restricciones", "no restrictions"],
    ),
    def("vegetarian", ["Vegetariano", "Vegetarian", "Végétarien"], &["vegetariana", "veggie"]),
    def("vegan", ["Vegano", "Vegan", "Végétalien"], &["vegana", "végan"]),
    def("pescatarian", ["Pescetariano", "Pescatarian", "Pescétarien"], &["pescetariana"]),
    def("gluten_free", ["Sin gluten", "Gluten-free", "Sans gluten"], &["celíaco", "celiac"]),
    def("halal", ["Halal", "Halal", "Halal"], &[]),
    def("kosher", ["Kosher", "Kosher", "Casher"], &[]),
    def("keto", ["Keto", "Keto", "Céto"], &["cetogénica", "ketogenic"]),
];

pub(crate) const ALLERGY: &[EntryDef] = &[
    def("milk", ["Leche", "Milk", "Lait"], &["lácteos", "dairy"]),
    def("egg", ["Huevo", "Egg", "Œuf"], &["huevos", "eggs"]),
    def("peanut", ["Cacahuete", "Peanut", "Arachide"], &["cacahuetes", "maní", "peanuts"]),
    def(
        "tree_nuts",
        ["Frutos secos", "Tree nuts", "Fruits à coque"],
        &["nuts", "nueces"],
    ),
    def("gluten", ["Gluten", "Gluten", "Gluten"], &[]),
    def("shellfish", ["Marisco", "Shellfish", "Fruits de mer"], &["mariscos", "crustáceos"]),
    def("fish", ["Pescado", "Fish", "Poisson"], &[]),
    def("soy", ["Soja", "Soy", "Soja"], &["soya"]),
    def("sesame", ["Sésamo", "Sesame", "Sésame"], &[]),
    def("mustard", ["Mostaza", "Mustard", "Moutarde"], &[]),
    def("sulfites", ["Sulfitos", "Sulfites", "Sulfites"], &[]),
];

pub(crate) const INTOLERANCE: &[EntryDef] = &[
    def("lactose", ["Lactosa", "Lactose", "Lactose"], &[]),
    def("gluten", ["Gluten", "Gluten", "Gluten"], &[]),
    def("fructose", ["Fructosa", "Fructose", "Fructose"], &[]),
    def("histamine", ["Histamina", "Histamine", "Histamine"], &[]),
    def("caffeine", ["Cafeína", "Caffeine", "Caféine"], &[]),
    def("alcohol", ["Alcohol", "Alcohol", "Alcool"], &[]),
];

pub(crate) const PET_ALLERGY: &[EntryDef] = &[
    def("cats", ["Gatos", "Cats", "Chats"], &["gato", "cat"]),
    def("dogs", ["Perros", "Dogs", "Chiens"], &["perro", "dog"]),
    def("birds", ["Aves", "Birds", "Oiseaux"], &["pájaros"]),
    def("rodents", ["Roedores", "Rodents", "Rongeurs"], &[]),
    def("horses", ["Caballos", "Horses", "Chevaux"], &[]),
];

use super::{EntryDef, def};

pub(crate) const DRINK: &[EntryDef] = &[
    def("water", ["Agua", "Water", "Eau"], &[]),
    def("soft_drinks", ["Refrescos", "Soft drinks", "Sodas"], &["refresco", "soda"]),
    def("juice", ["Zumo", "Juice", "Jus"], &["jugo", "zumos"]),
    def("beer", ["Cerveza", "Beer", "Bière"], &["caña"]),
    def("red_wine", ["Vino tinto", "Red wine", "Vin rouge"], &["tinto"]),
    def("white_wine", ["Vino blanco", "White wine", "Vin blanc"], &[]),
    def(
        "sparkling_wine",
        ["Vino espumoso", "Sparkling wine", "Vin pétillant"],
        &["cava", "champán", "champagne"],
    ),
    def("cocktails", ["Cócteles", "Cocktails", "Cocktails"], &["cocteles", "cóctel"]),
    def("spirits", ["Licores", "Spirits", "Spiritueux"], &["copas"]),
    def("coffee", ["Café", "Coffee", "Café"], &[]),
    def("tea", ["Té", "Tea", "Thé"], &["infusión"]),
    def("non_alcoholic", ["Sin alcohol", "Non-alcoholic", "Sans alcool"], &["alcohol free"]),
];

pub(crate) const COLOR: &[EntryDef] = &[
    def("red", ["Rojo", "Red", "Rouge"], &[]),
    def("orange", ["Naranja", "Orange", "Orange"], &[]),
    def("yellow", ["Amarillo", "Yellow", "Jaune"], &[]),
    def("green", ["Verde", "Green", "Vert"], &[]),
    def("blue", ["Azul", "Blue", "Bleu"], &[]),
    def("purple", ["Morado", "Purple", "Violet"], &["lila", "violeta"]),
    def("pink", ["Rosa", "Pink", "Rose"], &[]),
    def("white", ["Blanco", "White", "Blanc"], &[]),
    def("black", ["Negro", "Black", "Noir"], &[]),
    def("gold", ["Dorado", "Gold", "Doré"], &[]),
    def("silver", ["Plateado", "Silver", "Argenté"], &[]),
    def("pastel", ["Tonos pastel", "Pastel colors", "Tons pastel"], &["pastel"]),
];

pub(crate) const MUSIC_GENRE: &[EntryDef] = &[
    def("pop", ["Pop", "Pop", "Pop"], &[]),
    def("rock", ["Rock", "Rock", "Rock"], &[]),
    def("latin", ["Música latina", "Latin", "Musique latine"], &["reggaeton", "salsa"]),
    def("electronic", ["Electrónica", "Electronic", "Électro"], &["techno", "house"]),
    def("jazz", ["Jazz", "Jazz", "Jazz"], &[]),
    def("classical", ["Clásica", "Classical", "Classique"], &[]),
    def("indie", ["Indie", "Indie", "Indé"], &[]),
    def("hip_hop", ["Hip hop", "Hip hop", "Hip-hop"], &["rap"]),
    def("flamenco", ["Flamenco", "Flamenco", "Flamenco"], &[]),
    def("eighties", ["Años 80", "80s", "Années 80"], &["ochenta"]),
];

pub(crate) const DAY_MOMENT: &[EntryDef] = &[
    def("morning", ["Mañana", "Morning", "Matin"], &[]),
    def("brunch", ["Brunch", "Brunch", "Brunch"], &[]),
    def("lunch", ["Comida", "Lunch", "Déjeuner"], &["almuerzo"]),
    def("afternoon", ["Tarde", "Afternoon", "Après-midi"], &[]),
    def("evening", ["Anochecer", "Evening", "Soirée"], &[]),
    def("night", ["Noche", "Night", "Nuit"], &[]),
];

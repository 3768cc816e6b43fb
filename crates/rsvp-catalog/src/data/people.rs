use super::{EntryDef, def};

pub(crate) const EXPERIENCE_TYPE: &[EntryDef] = &[
    def("dinner", ["Cena", "Dinner", "Dîner"], &["cena en casa"]),
    def("party", ["Fiesta", "Party", "Fête"], &["celebración"]),
    def("outdoor", ["Aire libre", "Outdoor", "Plein air"], &["outdoors", "picnic"]),
    def("cultural", ["Cultural", "Cultural", "Culturel"], &["museo", "teatro"]),
    def("sports", ["Deportiva", "Sports", "Sportive"], &["deporte", "sport"]),
    def("games", ["Juegos", "Games", "Jeux"], &["juegos de mesa", "board games"]),
    def("relaxed", ["Tranquila", "Relaxed", "Détendue"], &["chill", "relajada"]),
    def("adventure", ["Aventura", "Adventure", "Aventure"], &[]),
];

pub(crate) const RELATIONSHIP: &[EntryDef] = &[
    def("family", ["Familia", "Family", "Famille"], &["familiar"]),
    def("partner", ["Pareja", "Partner", "Partenaire"], &["novio", "novia"]),
    def("friend", ["Amigo", "Friend", "Ami"], &["amiga", "amigos"]),
    def(
        "close_friend",
        ["Amigo cercano", "Close friend", "Ami proche"],
        &["mejor amigo", "best friend"],
    ),
    def(
        "coworker",
        ["Compañero de trabajo", "Coworker", "Collègue"],
        &["colleague", "co-worker", "compañera de trabajo", "trabajo"],
    ),
    def("neighbor", ["Vecino", "Neighbor", "Voisin"], &["neighbour", "vecina"]),
    def(
        "classmate",
        ["Compañero de clase", "Classmate", "Camarade de classe"],
        &["compañera de clase"],
    ),
    def("acquaintance", ["Conocido", "Acquaintance", "Connaissance"], &["conocida"]),
    def("other", ["Otro", "Other", "Autre"], &[]),
];

pub(crate) const PUNCTUALITY: &[EntryDef] = &[
    def("early", ["Llego antes", "Early", "En avance"], &["temprano"]),
    def("punctual", ["Puntual", "On time", "À l'heure"], &["on-time"]),
    def("flexible", ["Flexible", "Flexible", "Flexible"], &[]),
    def("late", ["Suelo llegar tarde", "Usually late", "Souvent en retard"], &["tarde"]),
];

pub(crate) const TOPIC: &[EntryDef] = &[
    def("travel", ["Viajes", "Travel", "Voyages"], &["viajar"]),
    def("food", ["Gastronomía", "Food", "Gastronomie"], &["comida", "cocina"]),
    def("sports", ["Deportes", "Sports", "Sport"], &["fútbol"]),
    def("movies", ["Cine", "Movies", "Cinéma"], &["películas", "films"]),
    def("tv_series", ["Series", "TV series", "Séries"], &["tv"]),
    def("music", ["Música", "Music", "Musique"], &[]),
    def("books", ["Libros", "Books", "Livres"], &["lectura", "reading"]),
    def("pets", ["Mascotas", "Pets", "Animaux"], &["animales"]),
    def("work", ["Trabajo", "Work", "Travail"], &[]),
    def("politics", ["Política", "Politics", "Politique"], &[]),
    def("religion", ["Religión", "Religion", "Religion"], &[]),
    def("money", ["Dinero", "Money", "Argent"], &["finanzas"]),
    def("family", ["Familia", "Family", "Famille"], &[]),
    def("technology", ["Tecnología", "Technology", "Technologie"], &["tech"]),
    def("health", ["Salud", "Health", "Santé"], &[]),
    def("exes", ["Ex parejas", "Exes", "Ex"], &["exs"]),
];

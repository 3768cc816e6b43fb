//! Header alias table for CSV imports.
//!
//! Maps the column names produced by spreadsheet tools and contact exporters
//! (Google, Outlook, Apple) in Spanish, English and French to a
//! [`ContactField`]. The table is a many-to-one index over normalized
//! aliases, built once on first use.

use std::collections::HashMap;
use std::sync::LazyLock;

use rsvp_core::normalize::normalize_key;

use crate::record::ContactField;

const ALIASES: &[(ContactField, &[&str])] = &[
    (
        ContactField::FirstName,
        &[
            "first name",
            "firstname",
            "first",
            "given name",
            "nombre",
            "nombres",
            "nombre de pila",
            "primer nombre",
            "prénom",
            "nome",
        ],
    ),
    (
        ContactField::LastName,
        &[
            "last name",
            "lastname",
            "surname",
            "family name",
            "apellido",
            "apellidos",
            "nom de famille",
            "nom",
            "cognome",
            "sobrenome",
        ],
    ),
    (
        ContactField::FullName,
        &[
            "name",
            "full name",
            "fullname",
            "display name",
            "contact name",
            "nombre completo",
            "nombre y apellidos",
            "nom complet",
            "nom et prénom",
            "nome completo",
            "invitado",
            "invité",
            "guest",
        ],
    ),
    (
        ContactField::Email,
        &[
            "email",
            "e-mail",
            "mail",
            "email address",
            "e-mail address",
            "e-mail 1 - value",
            "correo",
            "correo electrónico",
            "email personal",
            "courriel",
            "adresse e-mail",
            "adresse mail",
        ],
    ),
    (
        ContactField::Phone,
        &[
            "phone",
            "phone number",
            "telephone",
            "tel",
            "mobile",
            "mobile phone",
            "cell",
            "cellphone",
            "phone 1 - value",
            "primary phone",
            "home phone",
            "teléfono",
            "móvil",
            "celular",
            "whatsapp",
            "numéro de téléphone",
            "portable",
        ],
    ),
    (
        ContactField::City,
        &[
            "city",
            "town",
            "home city",
            "ciudad",
            "localidad",
            "población",
            "ville",
            "cidade",
        ],
    ),
    (
        ContactField::Country,
        &[
            "country",
            "country/region",
            "home country/region",
            "país",
            "pays",
        ],
    ),
    (
        ContactField::Address,
        &[
            "address",
            "street",
            "street address",
            "home street",
            "address 1 - formatted",
            "dirección",
            "domicilio",
            "calle",
            "adresse",
            "rue",
        ],
    ),
    (
        ContactField::Company,
        &[
            "company",
            "organization",
            "organisation",
            "organization 1 - name",
            "organization name",
            "empresa",
            "compañía",
            "entreprise",
            "société",
        ],
    ),
];

static HEADER_INDEX: LazyLock<HashMap<String, ContactField>> = LazyLock::new(|| {
    let mut index = HashMap::new();
    for (field, aliases) in ALIASES {
        for alias in *aliases {
            index.insert(header_key(alias), *field);
        }
    }
    index
});

/// Normalizes a header cell: [`normalize_key`] with `_ - . /` read as spaces.
#[must_use]
pub fn header_key(cell: &str) -> String {
    let spaced: String = cell
        .chars()
        .map(|c| if matches!(c, '_' | '-' | '.' | '/') { ' ' } else { c })
        .collect();
    normalize_key(&spaced)
}

/// Maps a header cell to its field, if it is a known alias.
#[must_use]
pub fn header_field(cell: &str) -> Option<ContactField> {
    HEADER_INDEX.get(&header_key(cell)).copied()
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::Entry;

    use super::*;

    #[test]
    fn aliases_do_not_collide() {
        let mut seen: HashMap<String, ContactField> = HashMap::new();
        for (field, aliases) in ALIASES {
            for alias in *aliases {
                match seen.entry(header_key(alias)) {
                    Entry::Occupied(existing) => {
                        assert_eq!(existing.get(), field, "alias {alias:?} maps to two fields");
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(*field);
                    }
                }
            }
        }
    }

    #[test]
    fn matches_regardless_of_case_and_accents() {
        assert_eq!(header_field("CORREO"), Some(ContactField::Email));
        assert_eq!(header_field("Correo Electronico"), Some(ContactField::Email));
        assert_eq!(header_field(" Nom complet "), Some(ContactField::FullName));
        assert_eq!(header_field("Telefono"), Some(ContactField::Phone));
    }

    #[test]
    fn separators_read_as_spaces() {
        assert_eq!(header_field("first_name"), Some(ContactField::FirstName));
        assert_eq!(header_field("E-mail 1 - Value"), Some(ContactField::Email));
        assert_eq!(header_field("email_address"), Some(ContactField::Email));
        assert_eq!(header_field("Country/Region"), Some(ContactField::Country));
    }

    #[test]
    fn unknown_header_is_none() {
        assert_eq!(header_field("Ana"), None);
        assert_eq!(header_field("ana@x.com"), None);
        assert_eq!(header_field(""), None);
    }
}

//! Shared fixtures.

use rsvp_service::SuggestionSnapshot;
use serde_json::json;
use uuid::Uuid;

pub const EVENT_ID: Uuid = Uuid::from_u128(0x6f1c_4a52_54b3_4c3e_9db1_1d1a_3f1f_00e1);
pub const OTHER_EVENT_ID: Uuid = Uuid::from_u128(0x6f1c_4a52_54b3_4c3e_9db1_1d1a_3f1f_00e2);

const ANA: Uuid = Uuid::from_u128(0x6f1c_4a52_54b3_4c3e_9db1_1d1a_3f1f_0001);
const LUIS: Uuid = Uuid::from_u128(0x6f1c_4a52_54b3_4c3e_9db1_1d1a_3f1f_0002);
const MARTA: Uuid = Uuid::from_u128(0x6f1c_4a52_54b3_4c3e_9db1_1d1a_3f1f_0003);

/// Snapshot JSON as the hosting backend would export it.
///
/// Ana and Luis are invited to [`EVENT_ID`]; Marta is in the guest list but
/// not invited. Ana mentions salmon three times, Luis dislikes it.
#[must_use]
pub fn snapshot_json() -> serde_json::Value {
    json!({
        "guests": [
            { "id": ANA, "firstName": "Ana", "lastName": "García", "email": "ana@example.com" },
            { "id": LUIS, "firstName": "Luis", "phone": "600111222" },
            { "id": MARTA, "firstName": "Marta" }
        ],
        "events": [
            { "id": EVENT_ID, "title": "Cena de otoño", "startsAt": "2026-11-07T20:00:00Z" }
        ],
        "invitations": [
            { "id": Uuid::from_u128(1), "eventId": EVENT_ID, "guestId": ANA, "status": "accepted" },
            { "id": Uuid::from_u128(2), "eventId": EVENT_ID, "guestId": LUIS }
        ],
        "preferences": {
            ANA.to_string(): {
                "foodLikes": ["salmon", "Salmón", "salmon", "croquetas"],
                "drinkLikes": ["tinto", "Cerveza"],
                "musicGenres": ["flamenco"],
                "icebreakerTopics": ["viajes"],
                "punctuality": "flexible"
            },
            LUIS.to_string(): {
                "foodLikes": ["croquetas", "tortilla"],
                "foodDislikes": ["salmon"],
                "drinkLikes": ["beer"],
                "tabooTopics": ["politics"],
                "punctuality": "late"
            },
            MARTA.to_string(): {
                "foodLikes": ["sushi"],
                "punctuality": "punctual"
            }
        },
        "sensitive": {
            LUIS.to_string(): {
                "allergies": ["tree nuts"],
                "petAllergies": ["cats"]
            }
        }
    })
}

/// [`snapshot_json`] deserialized.
///
/// # Panics
/// Panics if the fixture no longer matches the snapshot types.
#[must_use]
pub fn snapshot() -> SuggestionSnapshot {
    SuggestionSnapshot::from_json(&snapshot_json().to_string())
        .unwrap_or_else(|e| panic!("fixture snapshot is invalid: {e}"))
}

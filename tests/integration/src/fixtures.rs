//! Test fixtures
//!
//! Roster snapshots decoded the same way the JSON export is.

use roster_cache::parse_members;
use roster_core::{Member, PlayableClass};
use serde_json::{json, Value};

/// A small guild covering every role, mains and alts, enchant gaps and
/// raid lockouts
pub fn sample_document() -> Value {
    json!({
        "members": [
            {
                "name": "Thrall",
                "class": "Shaman",
                "specialization": "Restoration",
                "guildRankIndex": 0,
                "itemLevel": 489,
                "mplusRating": 3120.5,
                "pvpRating": 1800,
                "missingEnchantSlots": [],
                "hasTierSet": true,
                "lockoutProgress": {
                    "Normal": { "completedEncounters": 8, "totalEncounters": 8, "encounterNames": ["Ulgrax", "Bloodbound Horror"] },
                    "Heroic": { "completedEncounters": 3, "totalEncounters": 8, "encounterNames": ["Ulgrax"] }
                }
            },
            {
                "name": "Varian",
                "class": "Warrior",
                "specialization": "Protection",
                "guildRankIndex": 1,
                "itemLevel": 486,
                "mplusRating": 2890.0,
                "pvpRating": null,
                "missingEnchantSlots": ["Ring 1"],
                "hasTierSet": false
            },
            {
                "name": "Jaina",
                "class": "Mage",
                "specialization": "Frost",
                "guildRankIndex": 2,
                "itemLevel": 491,
                "mplusRating": 3300.0,
                "pvpRating": 2100
            },
            {
                "name": "Anduin",
                "class": "Priest",
                "specialization": "Holy",
                "guildRankIndex": 6,
                "itemLevel": 470,
                "mplusRating": 1500.0,
                "missingEnchantSlots": ["Weapon", "Cloak"]
            },
            {
                "name": "Illidan",
                "class": "Demon Hunter",
                "specialization": null,
                "guildRankIndex": 7,
                "itemLevel": 455
            }
        ]
    })
}

pub fn sample_members() -> Vec<Member> {
    parse_members(&sample_document().to_string()).expect("sample document decodes")
}

/// `count` Hunters named `Member00`, `Member01`, ...
pub fn numbered_members(count: usize) -> Vec<Member> {
    (0..count)
        .map(|i| Member::new(format!("Member{i:02}"), PlayableClass::Hunter, "Marksmanship", 0))
        .collect()
}

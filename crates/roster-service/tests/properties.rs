//! Property tests for the roster engine

use proptest::prelude::*;
use roster_common::RankConfig;
use roster_core::{Member, PlayableClass, Role, RoleBucket, RosterAssignment};
use roster_service::engine::{filter_members, paginate, FilterCriteria, RankSelector, RoleResolver};

fn class_strategy() -> impl Strategy<Value = PlayableClass> {
    prop::sample::select(PlayableClass::ALL.to_vec())
}

fn bucket_strategy() -> impl Strategy<Value = RoleBucket> {
    prop::sample::select(RoleBucket::ALL.to_vec())
}

fn spec_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "Blood",
            "Protection",
            "Holy",
            "Restoration",
            "Fire",
            "Outlaw",
            "Devastation",
            "",
        ])
        .prop_map(str::to_string),
        "[A-Za-z ]{0,12}",
    ]
}

prop_compose! {
    fn member_strategy()(
        name in "[A-Za-z]{1,10}",
        class in class_strategy(),
        specialization in spec_strategy(),
        rank in 0u8..10,
        item_level in 0u32..700,
        mplus_rating in 0.0f64..4000.0,
        missing_enchants in any::<bool>(),
    ) -> Member {
        let mut member = Member::new(name, class, specialization, rank);
        member.item_level = item_level;
        member.mplus_rating = mplus_rating;
        if missing_enchants {
            member.missing_enchant_slots.insert("Ring 1".to_string());
        }
        member
    }
}

fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
    (
        prop::option::of("[a-z]{0,3}"),
        prop::sample::select(vec![RankSelector::All, RankSelector::Mains, RankSelector::Alts]),
        prop::collection::btree_set(class_strategy(), 0..3),
        prop::option::of(prop::sample::select(vec![Role::Tank, Role::Healer, Role::Dps])),
        0u32..600,
        prop::option::of(prop::sample::select(vec!["missing-enchants", "has-mplus-score", "bogus"])),
    )
        .prop_map(|(search, rank, classes, role, min_item_level, special)| {
            let mut criteria = FilterCriteria::new()
                .rank(rank)
                .classes(classes)
                .min_item_level(min_item_level);
            if let Some(search) = search {
                criteria = criteria.search(search);
            }
            if let Some(role) = role {
                criteria = criteria.role(role);
            }
            if let Some(special) = special {
                criteria = criteria.special(special);
            }
            criteria
        })
}

proptest! {
    #[test]
    fn role_resolution_is_total(specialization in ".{0,24}") {
        let role = RoleResolver::default().resolve(&specialization);
        prop_assert!(matches!(role, Role::Tank | Role::Healer | Role::Dps));
    }

    #[test]
    fn filtering_is_an_ordered_subset(
        members in prop::collection::vec(member_strategy(), 0..40),
        criteria in criteria_strategy(),
    ) {
        let resolver = RoleResolver::default();
        let ranks = RankConfig::default();
        let filtered = filter_members(&members, &criteria, &ranks, &resolver);

        prop_assert!(filtered.len() <= members.len());

        // Every kept member appears in the input, and in input order.
        let mut cursor = members.iter().map(|m| m as *const Member);
        for kept in &filtered {
            let kept = *kept as *const Member;
            prop_assert!(cursor.any(|candidate| candidate == kept));
        }
    }

    #[test]
    fn default_criteria_keep_everyone(members in prop::collection::vec(member_strategy(), 0..40)) {
        let filtered = filter_members(
            &members,
            &FilterCriteria::new(),
            &RankConfig::default(),
            &RoleResolver::default(),
        );
        prop_assert_eq!(filtered.len(), members.len());
    }

    #[test]
    fn pages_cover_every_item_once(total in 0usize..120, page_size in 1usize..30) {
        let items: Vec<usize> = (0..total).collect();
        let first = paginate(&items, 1, page_size);

        let mut seen = Vec::new();
        for page in 1..=first.total_pages.max(1) {
            let current = paginate(&items, page, page_size);
            prop_assert!(current.items.len() <= page_size);
            prop_assert_eq!(current.total_items, total);
            seen.extend(current.items);
        }
        prop_assert_eq!(seen, items);
    }

    #[test]
    fn assignment_keeps_names_unique(
        ops in prop::collection::vec(
            (prop::sample::select(vec!["Ana", "ana", "Bob", "Cyn", "BOB"]), prop::option::of(bucket_strategy())),
            0..40,
        )
    ) {
        let mut assignment = RosterAssignment::new();
        for (name, bucket) in ops {
            match bucket {
                Some(bucket) => {
                    assignment.assign(name, bucket);
                    prop_assert_eq!(assignment.bucket_of(name), Some(bucket));
                }
                None => {
                    assignment.remove(name);
                    prop_assert_eq!(assignment.bucket_of(name), None);
                }
            }

            let mut names: Vec<String> = assignment
                .iter()
                .flat_map(|(_, names)| names.iter().map(|n| n.to_lowercase()))
                .collect();
            let before = names.len();
            names.sort();
            names.dedup();
            prop_assert_eq!(names.len(), before);
            prop_assert_eq!(assignment.len(), before);
        }
    }
}

//! End-to-end fixture scenarios through the public API.

use fixture_core::{
    create_fixture, create_fixture_with, qualified_by, qualified_by_variant, Configuration,
    FixtureError, Generator, GeneratorId, GeneratorRegistry, Number, RandomSource, Result,
    SeededRandom, SharedRandom,
};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Account {
    id: u32,
    owner: String,
}

struct AccountGenerator {
    random: SharedRandom,
}

impl Generator<Account> for AccountGenerator {
    fn generate(&self) -> Account {
        let id = self.random.next_int_bounded(1_000) as u32;
        Account {
            id,
            owner: format!("owner-{id}"),
        }
    }
}

#[derive(Debug)]
enum Tier {
    Gold,
    Silver,
}

fn account_fixture(seed: u64) -> fixture_core::Fixture {
    create_fixture_with(|config| {
        config
            .set_seed(seed)
            .add_generator::<Account, _>(|random: SharedRandom| AccountGenerator { random }, None);
        Ok(())
    })
    .unwrap()
}

#[test]
fn test_identical_seeds_identical_sequences() {
    let first = account_fixture(23);
    let second = account_fixture(23);

    assert_eq!(
        first.list::<Account>(None, None).unwrap(),
        second.list::<Account>(None, None).unwrap()
    );
    assert_eq!(
        first.map::<String, i64>(None, None, None).unwrap(),
        second.map::<String, i64>(None, None, None).unwrap()
    );
    assert_eq!(
        first.nullable::<char>(None).unwrap(),
        second.nullable::<char>(None).unwrap()
    );
}

#[test]
fn test_different_seeds_diverge() {
    let first = account_fixture(1);
    let second = account_fixture(2);

    assert_ne!(
        first.list::<i64>(None, Some(8)).unwrap(),
        second.list::<i64>(None, Some(8)).unwrap()
    );
}

#[test]
fn test_seed_23_custom_generator_registration() {
    let fixture = account_fixture(23);

    let account_id = GeneratorId::for_type::<Account>();
    assert!(fixture.generators().contains(&account_id));

    let reference = SeededRandom::new(23);
    let expected_id = reference.next_int_bounded(1_000) as u32;
    assert_eq!(
        fixture.value::<Account>(None).unwrap(),
        Account {
            id: expected_id,
            owner: format!("owner-{expected_id}"),
        }
    );
}

#[test]
fn test_builtin_override_immunity() {
    let plain = create_fixture().unwrap();
    let overridden = create_fixture_with(|config| {
        config.add_generator::<i32, _>(|_: SharedRandom| || 0, None);
        config.add_generator::<String, _>(|_: SharedRandom| || String::from("custom"), None);
        Ok(())
    })
    .unwrap();

    for _ in 0..10 {
        assert_eq!(
            plain.value::<i32>(None).unwrap(),
            overridden.value::<i32>(None).unwrap()
        );
        assert_eq!(
            plain.value::<String>(None).unwrap(),
            overridden.value::<String>(None).unwrap()
        );
    }
}

#[test]
fn test_qualifier_disambiguation() {
    let gold = qualified_by_variant(&Tier::Gold);
    let silver = qualified_by_variant(&Tier::Silver);

    let fixture = create_fixture_with(|config| {
        config.add_generator::<u32, _>(
            |random: SharedRandom| move || 1_000 + random.next_int_bounded(10) as u32,
            Some(&gold),
        );
        config.add_generator::<u32, _>(
            |random: SharedRandom| move || random.next_int_bounded(10) as u32,
            Some(&silver),
        );
        Ok(())
    })
    .unwrap();

    for _ in 0..50 {
        assert!(fixture.value::<u32>(Some(&gold)).unwrap() >= 1_000);
        assert!(fixture.value::<u32>(Some(&silver)).unwrap() < 10);
    }
}

#[test]
fn test_selector_values_are_members() {
    let color = qualified_by("color");
    let fixture = create_fixture_with(|config| {
        config.use_selector(["red", "green", "blue"].map(String::from), Some(&color))?;
        Ok(())
    })
    .unwrap();

    let picked: HashSet<String> = fixture.set(Some(&color), Some(50)).unwrap();
    assert!(!picked.is_empty());
    assert!(picked
        .iter()
        .all(|c| ["red", "green", "blue"].contains(&c.as_str())));
}

#[test]
fn test_empty_selector_fails_build() {
    let result = create_fixture_with(|config| {
        config.use_selector(Vec::<Account>::new(), None)?;
        Ok(())
    });

    assert_eq!(
        result.err(),
        Some(FixtureError::InvalidArgument(
            "Missing selectable items!".to_string()
        ))
    );
}

#[test]
fn test_missing_generator_names_id() {
    let fixture = create_fixture().unwrap();
    let qualifier = qualified_by("nobody");

    match fixture.value::<Account>(Some(&qualifier)) {
        Err(FixtureError::MissingGenerator { id }) => {
            assert_eq!(
                id.as_str(),
                format!("q:nobody:q:{}", std::any::type_name::<Account>())
            );
        }
        other => panic!("Expected MissingGenerator, got {other:?}"),
    }
}

#[test]
fn test_dependent_generator_over_registered_generators() {
    let mut config = Configuration::new();
    config
        .set_seed(7)
        .add_generator::<Account, _>(|random: SharedRandom| AccountGenerator { random }, None)
        .add_dependent_generator::<Vec<Account>, _>(
            |_: SharedRandom, generators: &GeneratorRegistry| -> Result<_> {
                let accounts = generators.get::<Account>(None)?;
                let counts = generators.get::<u8>(None)?;
                Ok(move || {
                    let count = usize::from(counts.generate() % 4);
                    (0..count).map(|_| accounts.generate()).collect::<Vec<_>>()
                })
            },
            None,
        );
    let fixture = config.build().unwrap();

    for _ in 0..20 {
        let accounts = fixture.value::<Vec<Account>>(None).unwrap();
        assert!(accounts.len() < 4);
    }
}

#[test]
fn test_collection_size_contract() {
    let fixture = account_fixture(99);

    assert_eq!(fixture.list::<Account>(None, Some(5)).unwrap().len(), 5);
    assert!(fixture.set::<Account>(None, Some(5)).unwrap().len() <= 5);
    assert_eq!(fixture.array::<Number>(None, Some(5)).unwrap().len(), 5);

    let pulled: Vec<bool> = fixture
        .sequence::<bool>(None, Some(6))
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(pulled.len(), 6);
}

#[test]
fn test_value_from_caller_data() {
    let fixture = create_fixture().unwrap();
    let options = vec![Tier::Gold, Tier::Silver];

    let picked = fixture.value_from(options).unwrap();
    assert!(matches!(picked, Tier::Gold | Tier::Silver));
}

//! UUID generator.

use fixture_core::{Configuration, RandomSource, SharedRandom};
use uuid::Uuid;

/// Generate a random UUID v4 from sixteen bytes of the random source.
pub fn generate_uuid_v4(random: &dyn RandomSource) -> Uuid {
    let mut bytes = [0u8; 16];
    random.fill_bytes(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Uuid::from_bytes(bytes)
}

/// Register the `Uuid` generator.
pub fn register(configuration: &mut Configuration) -> &mut Configuration {
    configuration.add_generator::<Uuid, _>(
        |random: SharedRandom| move || generate_uuid_v4(random.as_ref()),
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixture_core::testing::ScriptedRandom;
    use fixture_core::{create_fixture_with, SeededRandom};

    #[test]
    fn test_uuid_version_and_variant() {
        let random = SeededRandom::new(42);
        for _ in 0..20 {
            let uuid = generate_uuid_v4(&random);
            assert_eq!(uuid.get_version_num(), 4);
            assert_eq!(uuid.get_variant(), uuid::Variant::RFC4122);
        }
    }

    #[test]
    fn test_uuid_from_scripted_bytes() {
        let random = ScriptedRandom::new().with_bytes([0xff; 16]);
        let uuid = generate_uuid_v4(&random);

        assert_eq!(uuid.to_string(), "ffffffff-ffff-4fff-bfff-ffffffffffff");
    }

    #[test]
    fn test_uuid_deterministic() {
        let build = || {
            create_fixture_with(|config| {
                config.set_seed(42);
                register(config);
                Ok(())
            })
            .unwrap()
        };

        let first = build().list::<Uuid>(None, Some(3)).unwrap();
        let second = build().list::<Uuid>(None, Some(3)).unwrap();
        assert_eq!(first, second);
        assert_ne!(first[0], first[1]);
    }
}

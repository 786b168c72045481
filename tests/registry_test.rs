use hashreg::{
    build_registry, hashes, Error, HashDescriptor, HashFlags, ImplFlags, RegistryBuilder,
    RegistryWarning, Result, SeedState,
};

fn zero(_: &[u8], _: &SeedState, out: &mut [u8]) {
    out.fill(0);
}

fn ones(_: &[u8], _: &SeedState, out: &mut [u8]) {
    out.fill(1);
}

fn shadow_fnv() -> Result<Vec<HashDescriptor>> {
    Ok(vec![
        HashDescriptor::builder("fnv-1A-32", "shadow")
            .bits(32)
            .hash_fn(zero)
            .build()?,
    ])
}

fn invalid() -> Result<Vec<HashDescriptor>> {
    Ok(vec![HashDescriptor::builder("bad_name", "x").bits(32).hash_fn(zero).build()?])
}

#[test]
fn test_duplicate_name_across_factories_is_fatal() {
    let mut factories = hashes::BUILTIN.to_vec();
    factories.push(shadow_fnv);
    match build_registry(&factories) {
        Err(e @ Error::DuplicateName { .. }) => {
            assert!(e.is_fatal());
            assert!(e.to_string().contains("\"fnv-1A-32\" (\"FNV-1a-32\")"));
        }
        other => panic!("Expected DuplicateName, got {:?}", other.map(|r| r.len())),
    }
}

#[test]
fn test_invalid_descriptor_stops_the_build() {
    let result = build_registry(&[invalid]);
    assert!(matches!(result, Err(Error::InvalidDescriptor { ref name, .. }) if name == "bad_name"));
}

#[test]
fn test_canonical_both_with_mismatched_values_warns() {
    let mut builder = RegistryBuilder::new();
    builder
        .register(
            HashDescriptor::builder("lopsided-32", "x")
                .bits(32)
                .impl_flags(ImplFlags::CANONICAL_BOTH)
                .verification(0x1234_5678, 0x8765_4321)
                .hash_fn(ones)
                .build()
                .unwrap(),
        )
        .unwrap();
    assert_eq!(
        builder.warnings(),
        &[RegistryWarning::CanonicalMismatch {
            name: "lopsided-32".into(),
            le: 0x1234_5678,
            be: 0x8765_4321,
        }]
    );
}

#[test]
fn test_coincidental_equal_values_warn() {
    let mut builder = RegistryBuilder::new();
    builder
        .register(
            HashDescriptor::builder("same-32", "x")
                .bits(32)
                .impl_flags(ImplFlags::CANONICAL_LE)
                .verification(0xABCD_0123, 0xABCD_0123)
                .hash_fn(ones)
                .build()
                .unwrap(),
        )
        .unwrap();
    let registry = builder.freeze();
    assert_eq!(registry.warnings().len(), 1);
    assert!(registry.warnings()[0].to_string().contains("without CANONICAL_BOTH"));
}

#[test]
fn test_builtin_display_order() {
    let registry = build_registry(hashes::BUILTIN).unwrap();
    let names: Vec<&str> = registry.find_all_hashes().iter().map(|d| d.name()).collect();
    assert_eq!(
        names,
        vec![
            "donothing-32",
            "donothing-64",
            "donothing-128",
            "donothing-256",
            "sumhash-32",
            "SHA-2-224",
            "SHA-2-256",
            "CRC-32",
            "FNV-1a-32",
            "FNV-1a-64",
            "SipHash-2-4",
        ]
    );
}

#[test]
fn test_builtin_flags() {
    let registry = build_registry(hashes::BUILTIN).unwrap();
    let crc = registry.find_hash("crc-32").unwrap();
    assert!(crc.has_init());
    assert!(crc.hash_flags().contains(HashFlags::CRC_BASED | HashFlags::LOOKUP_TABLE));

    let sip = registry.find_hash("siphash_2_4").unwrap();
    assert!(sip.has_seed_fn());
    assert!(sip.seed(5, hashreg::SeedMode::AllowFix).is_expanded());

    let sha = registry.find_hash("sha2256").unwrap();
    assert!(sha.is_crypto() && sha.is_endian_defined());
    assert_eq!(sha.impl_flags().license(), Some(hashreg::License::Mit));
}

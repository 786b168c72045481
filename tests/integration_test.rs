// tests/integration_test.rs
use hashreg::{
    find_all_hashes, find_hash, get_registry, hashes, init_registry, list_hashes,
    verify_all_hashes, Error, Result,
};

// The process-wide registry can only be set once, so the whole lifecycle
// runs in one test.
#[test]
fn test_global_registry_lifecycle() -> Result<()> {
    assert!(matches!(get_registry(), Err(Error::RegistryNotInitialized)));
    assert!(find_hash("fnv-1a-32").is_none());
    assert!(find_all_hashes().is_err());

    let registry = init_registry(hashes::BUILTIN)?;
    assert!(!registry.is_empty());
    assert!(matches!(
        init_registry(hashes::BUILTIN),
        Err(Error::RegistryAlreadyInitialized)
    ));

    let a = find_hash("FNV_1a_32").expect("registered");
    let b = find_hash("fnv1a32").expect("registered");
    let c = find_hash("fnv-1a-32").expect("registered");
    assert!(std::ptr::eq(a, b) && std::ptr::eq(b, c));
    assert_eq!(a.name(), "FNV-1a-32");
    assert!(find_hash("no-such-hash").is_none());

    let all = find_all_hashes()?;
    assert_eq!(all.len(), registry.len());
    assert!(all[0].is_mock());
    let first_non_mock = all.iter().position(|d| !d.is_mock()).expect("non-mock hashes");
    assert!(all[first_non_mock].is_crypto());

    list_hashes(true)?;
    assert!(verify_all_hashes(false)?);
    Ok(())
}

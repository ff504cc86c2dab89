//! End-to-end test: state survives a snapshot round trip through disk.

use consortium_runtime::{load_config, Consortium};
use consortium_tests::*;
use consortium_types::{ConsortiumError, ConsortiumSnapshot, PartyId, QuorumRule};

#[test]
fn snapshot_written_and_restored_from_file() {
    let mut c = consortium_with_members(5);
    c.cast_vote(PartyId::new("pending"), &direct(&airline(3))).unwrap();
    c.authorize(PartyId::new("app"), &owner()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, serde_json::to_string_pretty(&c.snapshot()).unwrap()).unwrap();

    let loaded: ConsortiumSnapshot =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let mut restored = Consortium::restore(loaded).unwrap();

    assert_eq!(restored.airline_count(), 5);
    assert_eq!(restored.owner(), &owner());
    assert!(restored.is_authorized(&PartyId::new("app")));
    assert_eq!(restored.votes_for(&PartyId::new("pending")), 1);
    assert_eq!(restored.journal().receipt_count(), c.journal().receipt_count());

    // The restored consortium keeps governing with the same rules
    assert_eq!(
        restored.register_bootstrap(&direct(&airline(9))),
        Err(ConsortiumError::AlreadyBootstrapped)
    );
    restored
        .cast_vote(PartyId::new("pending"), &direct(&airline(4)))
        .unwrap();
    let outcome = restored
        .cast_vote(PartyId::new("pending"), &direct(&airline(0)))
        .unwrap();
    assert!(outcome.is_admitted());
}

#[test]
fn tampered_snapshot_is_rejected() {
    let c = consortium_with_members(2);
    let mut value = serde_json::to_value(c.snapshot()).unwrap();

    // Drop the founder while keeping the other member
    value["members"]
        .as_object_mut()
        .unwrap()
        .remove(airline(0).as_str());

    let snapshot: ConsortiumSnapshot = serde_json::from_value(value).unwrap();
    assert!(matches!(
        Consortium::restore(snapshot),
        Err(ConsortiumError::CorruptSnapshot(_))
    ));
}

#[test]
fn config_file_drives_governance_rules() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("consortium.toml");
    std::fs::write(
        &path,
        "admission_threshold = 2\nminimum_funding = \"10\"\nquorum_rule = \"strict_majority\"\n",
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.quorum_rule, QuorumRule::StrictMajority);

    let mut c = Consortium::new(owner(), config).unwrap();
    seed_members(&mut c, 2);
    assert_eq!(c.airline_count(), 2);

    // Threshold reached: two members need two votes
    assert_eq!(c.required_votes(), 2);
    let outcome = c.register(airline(2), &direct(&airline(0))).unwrap();
    assert!(!outcome.is_admitted());
    let outcome = c.register(airline(2), &direct(&airline(1))).unwrap();
    assert!(outcome.is_admitted());
}

use crate::status::codes::{self, ALIASES};
use crate::status::*;
use std::collections::HashSet;

#[test]
fn by_code_returns_the_requested_code() {
    for entry in all() {
        assert_eq!(by_code(entry.code()).unwrap().code(), entry.code());
    }
    for code in [100, 101, 102, 103, 200, 204, 301, 404, 418, 500, 511, 599] {
        assert_eq!(by_code(code).unwrap().code(), code);
    }
}

#[test]
fn by_name_returns_the_canonical_entry() {
    for entry in all() {
        let found = by_name(entry.canonical_name()).unwrap();
        assert_eq!(found.canonical_name(), entry.canonical_name());
        assert_eq!(found.code(), entry.code());
    }
}

#[test]
fn aliases_resolve_to_the_same_entry() {
    for &(alias, canonical) in ALIASES {
        let via_alias = by_name(alias).unwrap();
        let via_canonical = by_name(canonical).unwrap();
        assert!(std::ptr::eq(via_alias, via_canonical), "{alias} -> {canonical}");
    }
    assert_eq!(by_name("PAYLOAD_TOO_LARGE").unwrap().code(), 413);
    assert_eq!(by_name("REQUEST_URI_TOO_LONG").unwrap().code(), 414);
    assert_eq!(by_name("REQUESTED_RANGE_NOT_SATISFIABLE").unwrap().code(), 416);
    assert_eq!(
        by_name("UNPROCESSABLE_ENTITY").unwrap().canonical_name(),
        "UNPROCESSABLE_CONTENT"
    );
    assert_eq!(by_name("Accepted").unwrap().canonical_name(), "ACCEPTED");
}

#[test]
fn unknown_sentinel_has_many_names() {
    let registry = Registry::global();
    let aliases = registry.aliases_of("UNKNOWN").unwrap().collect::<Vec<_>>();
    assert!(aliases.len() >= 7);
    for alias in aliases {
        assert_eq!(by_name(alias).unwrap().code(), 0);
    }
    assert_eq!(registry.aliases_of("NETWORK_ERROR").unwrap().count(), 7);
}

#[test]
fn class_of_follows_leading_digit() {
    assert_eq!(class_of(404), StatusClass::ClientError);
    assert_eq!(class_of(200), StatusClass::Success);
    assert_eq!(class_of(101), StatusClass::Informational);
    assert_eq!(class_of(308), StatusClass::Redirection);
    assert_eq!(class_of(503), StatusClass::ServerError);
    assert_eq!(class_of(599), StatusClass::Nonstandard);
    assert_eq!(class_of(0), StatusClass::Nonstandard);
    assert_eq!(class_of(42), StatusClass::Nonstandard);
    assert_eq!(class_of(600), StatusClass::Nonstandard);
    assert_eq!(class_of(u16::MAX), StatusClass::Nonstandard);
}

#[test]
fn entries_carry_the_derived_class() {
    for entry in all() {
        assert_eq!(entry.class(), class_of(entry.code()), "{entry}");
    }
    assert!(by_code(0).unwrap().is_nonstandard());
    assert!(by_code(599).unwrap().is_nonstandard());
    assert!(by_code(511).unwrap().is_server_error());
}

#[test]
fn unknown_lookups_fail() {
    let err = by_code(999).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::UnknownCode(999));
    assert!(err.kind().is_lookup());

    let err = by_name("NOT_A_STATUS").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::UnknownName("NOT_A_STATUS".to_string()));

    assert!(by_name("not_found").is_err());
    assert!(by_name(" NOT_FOUND").is_err());
    assert!(by_code(419).is_err());
}

#[test]
fn zero_is_a_defined_entry() {
    let unknown = by_code(0).unwrap();
    assert_eq!(unknown.canonical_name(), "UNKNOWN");
    assert_eq!(unknown.reason_phrase(), "Unknown");
}

#[test]
fn all_is_strictly_ascending_and_unique() {
    let codes = all().map(Entry::code).collect::<Vec<_>>();
    assert!(codes.windows(2).all(|pair| pair[0] < pair[1]));

    let names = all().map(Entry::canonical_name).collect::<HashSet<_>>();
    assert_eq!(names.len(), codes.len());
    assert_eq!(codes.first(), Some(&0));
    assert_eq!(codes.last(), Some(&599));
}

#[test]
fn all_is_restartable() {
    let iter = all();
    let first_pass = iter.clone().count();
    assert_eq!(iter.count(), first_pass);
    assert_eq!(all().count(), Registry::global().len());
}

#[test]
fn round_trip_through_code_and_name() {
    for entry in all() {
        assert_eq!(by_code(entry.code()).unwrap().canonical_name(), entry.canonical_name());
        assert_eq!(by_name(entry.canonical_name()).unwrap().code(), entry.code());
    }
}

#[test]
fn constants_match_the_registry() {
    assert_eq!(codes::NOT_FOUND, 404);
    assert_eq!(codes::PAYLOAD_TOO_LARGE, codes::CONTENT_TOO_LARGE);
    assert_eq!(codes::NONE, codes::UNKNOWN);
    assert_eq!(by_code(codes::IM_A_TEAPOT).unwrap().reason_phrase(), "I'm a teapot");
}

#[test]
fn convenience_lookups() {
    assert_eq!(reason_phrase(404), Some("Not Found"));
    assert_eq!(reason_phrase(999), None);
    assert_eq!(Entry::from_name("GONE").unwrap().code(), 410);

    let teapot: &Entry = 418u16.try_into().unwrap();
    assert_eq!(teapot.to_string(), "418 I'm a teapot");
    assert!(<&Entry>::try_from(1000u16).is_err());
}

#[test]
fn docs_urls() {
    assert_eq!(
        by_code(404).unwrap().docs_url(),
        "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/404"
    );
    assert_eq!(
        by_code(599).unwrap().docs_url(),
        "https://en.wikipedia.org/wiki/List_of_HTTP_status_codes#599"
    );
    assert_eq!(
        by_code(0).unwrap().docs_url(),
        "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status"
    );
}

#[test]
fn default_codes_per_class() {
    assert_eq!(class_of(123).default_code(), Some(100));
    assert_eq!(class_of(499).default_code(), Some(400));
    assert_eq!(class_of(599).default_code(), None);
    assert_eq!(StatusClass::ClientError.to_string(), "Client Error");
}

#[test]
fn global_registry_is_shared_across_threads() {
    let handles = (0..4)
        .map(|_| std::thread::spawn(|| Registry::global() as *const Registry as usize))
        .collect::<Vec<_>>();
    let addresses = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect::<HashSet<_>>();
    assert_eq!(addresses.len(), 1);
}

use etna_client::session::interface::EtnaSession;

#[test]
fn test_cookie_header_is_name_ordered() {
    let session = EtnaSession::from_pairs("test_u", [("zeta", "2"), ("alpha", "1")]);
    assert_eq!(session.cookie_header(), "alpha=1; zeta=2");
}

#[test]
fn test_cookie_header_empty_without_cookies() {
    let session = EtnaSession::from_pairs("test_u", Vec::<(String, String)>::new());
    assert_eq!(session.cookie_header(), "");
    assert!(!session.has_cookies());
}

#[test]
fn test_single_cookie_has_no_separator() {
    let session = EtnaSession::from_pairs("test_u", [("jwt", "abcdef")]);
    assert_eq!(session.cookie_header(), "jwt=abcdef");
    assert!(session.has_cookies());
}

#[test]
fn test_sessions_with_same_material_are_equal() {
    let a = EtnaSession::from_pairs("test_u", [("jwt", "abcdef")]);
    let b = EtnaSession::from_pairs("test_u", [("jwt", "abcdef")]);
    assert_eq!(a, b);
}

#[test]
fn test_sessions_differ_on_login_or_credential() {
    let a = EtnaSession::from_pairs("test_u", [("jwt", "abcdef")]);
    let other_login = EtnaSession::from_pairs("other", [("jwt", "abcdef")]);
    let other_cookie = EtnaSession::from_pairs("test_u", [("jwt", "ghijkl")]);
    assert_ne!(a, other_login);
    assert_ne!(a, other_cookie);
}

#[test]
fn test_insertion_order_does_not_matter_for_equality() {
    let a = EtnaSession::from_pairs("test_u", [("a", "1"), ("b", "2")]);
    let b = EtnaSession::from_pairs("test_u", [("b", "2"), ("a", "1")]);
    assert_eq!(a, b);
    assert_eq!(a.cookie_header(), b.cookie_header());
}

mod common;

use backend::auth::session::SESSION_TTL;
use backend::{mint_session_token, verify_session_token, SecurityConfig};
use proptest::prelude::*;
use time::OffsetDateTime;

fn test_security() -> SecurityConfig {
    SecurityConfig::new(common::TEST_SECRET)
}

proptest! {
    /// Any identity the caller hands in survives the mint/verify roundtrip
    /// untouched, and both expiry claims land exactly one TTL after `now`.
    #[test]
    fn roundtrip_preserves_identity(user_id in "\\PC{0,32}", email in "\\PC{0,64}") {
        let security = test_security();
        let now = OffsetDateTime::now_utc();

        let issued = mint_session_token(&user_id, &email, now, &security).unwrap();
        let claims = verify_session_token(&issued.token, &security).unwrap();

        prop_assert_eq!(&claims.user_id, &user_id);
        prop_assert_eq!(&claims.email, &email);
        prop_assert_eq!(claims.exp, (now + SESSION_TTL).unix_timestamp());
        prop_assert_eq!(claims.iat, now.unix_timestamp());
    }

    /// Strings that were never signed by the key verify to nothing,
    /// whatever they look like.
    #[test]
    fn unsigned_strings_never_verify(token in "\\PC{0,128}") {
        let security = test_security();
        prop_assert!(verify_session_token(&token, &security).is_none());
    }
}

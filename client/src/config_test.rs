use super::*;

#[test]
fn resolve_uses_candidate() {
    let api = ApiConfig::resolve(Some("https://am.example.com".to_owned()));
    assert_eq!(api.base_url, "https://am.example.com");
}

#[test]
fn resolve_trims_candidate() {
    let api = ApiConfig::resolve(Some("  http://10.0.0.2:8000 \n".to_owned()));
    assert_eq!(api.base_url, "http://10.0.0.2:8000");
}

#[test]
fn resolve_blank_falls_back_to_default() {
    assert_eq!(ApiConfig::resolve(Some("   ".to_owned())).base_url, "http://localhost:8000");
    assert_eq!(ApiConfig::resolve(None).base_url, "http://localhost:8000");
}

#[test]
fn url_joins_endpoint_paths() {
    let api = ApiConfig::new("http://localhost:8000/");
    assert_eq!(api.url(accounts::USERS_PATH), "http://localhost:8000/users/");
    assert_eq!(api.url(accounts::LOGIN_TOKEN_PATH), "http://localhost:8000/login/token");
}

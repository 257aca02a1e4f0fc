use super::*;

#[test]
fn defaults_cover_four_projects() {
    let config = SiteConfig::default();
    let links: Vec<&str> = config.projects.iter().map(|p| p.link.as_str()).collect();
    assert_eq!(
        links,
        ["project-heart.html", "project-eog.html", "project-stormy.html", "project-signal.html"]
    );
    assert!(config.validate().is_ok());
}

#[test]
fn empty_json_is_default() {
    let config = SiteConfig::from_json("{}").unwrap();
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = SiteConfig::from_json(r#"{"background": {"particle_count": 40}, "relay": {"public_key": "pk"}}"#)
        .unwrap();
    assert_eq!(config.background.particle_count, 40);
    assert_eq!(config.background.link_distance, 25.0);
    assert_eq!(config.relay.public_key, "pk");
    assert_eq!(config.relay.service_id, "service_b1dktuq");
    assert_eq!(config.projects.len(), 4);
}

#[test]
fn project_kinds_parse_lowercase() {
    let json = r#"{"projects": [{"id": "p", "color": 255, "kind": "pool", "link": "p.html"}]}"#;
    let config = SiteConfig::from_json(json).unwrap();
    assert_eq!(config.projects[0].kind, ProjectKind::Pool);
}

#[test]
fn malformed_json_is_config_error() {
    assert!(matches!(SiteConfig::from_json("{"), Err(Error::Config(_))));
}

#[test]
fn rejects_too_many_particles() {
    let json = format!(r#"{{"background": {{"particle_count": {}}}}}"#, MAX_PARTICLES + 1);
    assert!(matches!(SiteConfig::from_json(&json), Err(Error::Invalid(_))));
}

#[test]
fn rejects_duplicate_project_ids() {
    let json = r#"{"projects": [
        {"id": "a", "color": 1, "kind": "heart", "link": "a.html"},
        {"id": "a", "color": 2, "kind": "wave", "link": "b.html"}
    ]}"#;
    assert!(matches!(SiteConfig::from_json(json), Err(Error::Invalid(_))));
}

#[test]
fn log_level_falls_back_to_info() {
    let mut config = SiteConfig::default();
    config.log_level = "debug".into();
    assert_eq!(config.log_level(), log::Level::Debug);
    config.log_level = "loud".into();
    assert_eq!(config.log_level(), log::Level::Info);
}

#[test]
fn project_lookup_by_id() {
    let config = SiteConfig::default();
    assert_eq!(config.project("project-stormy").map(|p| p.kind), Some(ProjectKind::Pool));
    assert!(config.project("project-missing").is_none());
}

#[test]
fn rejects_too_many_logo_nodes() {
    let json = format!(r#"{{"logo": {{"node_count": {}}}}}"#, MAX_LOGO_NODES + 1);
    assert!(matches!(SiteConfig::from_json(&json), Err(Error::Invalid(_))));
    assert!(SiteConfig::from_json(r#"{"logo": {"node_count": 100000000}}"#).is_err());
}

#[test]
fn camera_follow_must_be_a_fraction() {
    for follow in ["3.0", "1.5", "-0.1"] {
        let json = format!(r#"{{"background": {{"camera_follow": {follow}}}}}"#);
        assert!(matches!(SiteConfig::from_json(&json), Err(Error::Invalid(_))), "{follow}");
    }
    for follow in ["0.0", "0.5", "1.0"] {
        let json = format!(r#"{{"background": {{"camera_follow": {follow}}}}}"#);
        assert!(SiteConfig::from_json(&json).is_ok(), "{follow}");
    }
}

#[test]
fn rejects_negative_scalars() {
    let cases = [
        ("logo", "spread", "logo.spread"),
        ("logo", "link_distance", "logo.link_distance"),
        ("background", "max_speed", "background.max_speed"),
        ("background", "link_distance", "background.link_distance"),
        ("background", "repel_radius", "background.repel_radius"),
        ("background", "repel_strength", "background.repel_strength"),
        ("background", "camera_range", "background.camera_range"),
    ];
    for (section, key, field) in cases {
        let json = format!(r#"{{"{section}": {{"{key}": -1.0}}}}"#);
        match SiteConfig::from_json(&json) {
            Err(Error::Negative(f)) => assert_eq!(f, field),
            other => panic!("{field}: expected rejection, got {other:?}"),
        }
    }
}

#[test]
fn rejects_non_finite_scalars() {
    // JSON has no NaN literal; reach it through the struct
    let mut config = SiteConfig::default();
    config.background.repel_strength = f32::INFINITY;
    assert!(matches!(config.validate(), Err(Error::Negative("background.repel_strength"))));

    let mut config = SiteConfig::default();
    config.logo.spread = f32::NAN;
    assert!(matches!(config.validate(), Err(Error::Negative("logo.spread"))));

    let mut config = SiteConfig::default();
    config.background.camera_follow = f32::NAN;
    assert!(matches!(config.validate(), Err(Error::Invalid(_))));

    let mut config = SiteConfig::default();
    config.background.half_width = f32::INFINITY;
    assert!(matches!(config.validate(), Err(Error::Invalid(_))));
}

#[test]
fn rejects_colours_wider_than_rgb() {
    let json = format!(r#"{{"background": {{"particle_color": {}}}}}"#, 0x1_000_000);
    assert!(matches!(SiteConfig::from_json(&json), Err(Error::Invalid(_))));
}

#[test]
fn default_relay_has_no_public_key() {
    assert!(!SiteConfig::default().relay.has_public_key());
    let config = SiteConfig::from_json(r#"{"relay": {"public_key": "  "}}"#).unwrap();
    assert!(!config.relay.has_public_key());
    let config = SiteConfig::from_json(r#"{"relay": {"public_key": "pk_live"}}"#).unwrap();
    assert!(config.relay.has_public_key());
}

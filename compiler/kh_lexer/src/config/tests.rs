use super::*;
use pretty_assertions::assert_eq;

#[test]
fn default_drops_comments_and_reports() {
    let config = LexConfig::default();
    assert!(!config.keep_comments);
    assert!(!config.silent);
    assert_eq!(config, LexConfig::new());
}

#[test]
fn builder_sets_fields() {
    let config = LexConfig::new().keep_comments(true).silent(true);
    assert_eq!(
        config,
        LexConfig {
            keep_comments: true,
            silent: true,
        }
    );
    assert!(!config.keep_comments(false).keep_comments);
}

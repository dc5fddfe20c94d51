use super::*;

#[test]
fn photo_fallback_switches_to_placeholder_once() {
    assert_eq!(photo_fallback(PROFILE_IMAGE), Some(PROFILE_FALLBACK_IMAGE));
    assert_eq!(photo_fallback(PROFILE_FALLBACK_IMAGE), None);
}

#[test]
fn profile_image_differs_from_placeholder() {
    assert_ne!(PROFILE_IMAGE, PROFILE_FALLBACK_IMAGE);
}

#[test]
fn nav_items_target_rendered_sections() {
    let rendered = [HOME_SECTION, ABOUT_SECTION, SKILLS_SECTION, PROJECTS_SECTION, CONTACT_SECTION];
    assert_eq!(rendered, crate::content::SECTION_IDS);
    for item in crate::content::NAV_ITEMS {
        assert!(rendered.contains(&item.section), "{} has no rendered section", item.label);
    }
}

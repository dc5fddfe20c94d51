use super::*;

#[test]
fn nav_items_target_existing_sections() {
    for item in NAV_ITEMS {
        assert!(SECTION_IDS.contains(&item.section), "{} has no section", item.label);
        assert_eq!(item.href(), format!("#{}", item.label.to_lowercase()));
    }
}

#[test]
fn section_ids_are_unique() {
    for (i, a) in SECTION_IDS.iter().enumerate() {
        for b in &SECTION_IDS[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn project_cards_have_tags_and_images() {
    assert_eq!(PROJECTS.len(), 2);
    for project in PROJECTS {
        assert!(!project.tags.is_empty(), "{}", project.title);
        assert!(project.image.starts_with("/assets/"));
    }
}

#[test]
fn skill_stacks_are_non_empty() {
    let titles: Vec<_> = SKILL_STACKS.iter().map(|s| s.title).collect();
    assert_eq!(titles, ["Frontend", "Backend", "DevOps"]);
    assert!(SKILL_STACKS.iter().all(|s| !s.skills.is_empty()));
}

#[test]
fn external_links_use_https() {
    for link in SOCIAL_LINKS {
        assert!(link.href.starts_with("https://"), "{}", link.label);
    }
    assert!(REPOSITORIES_URL.starts_with("https://"));
    assert!(PROFILE_FALLBACK_IMAGE.starts_with("https://"));
}

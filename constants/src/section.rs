pub struct SectionInfo {
    pub index: usize,
    pub id: &'static str,
    pub title: &'static str,
}

/// One entry per formation marker, in star order.
pub const SECTION_MAP: &[SectionInfo] = &[
    SectionInfo {
        index: 0,
        id: "section-0",
        title: "About",
    },
    SectionInfo {
        index: 1,
        id: "section-1",
        title: "Projects",
    },
    SectionInfo {
        index: 2,
        id: "section-2",
        title: "Experience",
    },
    SectionInfo {
        index: 3,
        id: "section-3",
        title: "Achievements",
    },
    SectionInfo {
        index: 4,
        id: "section-4",
        title: "Contact",
    },
];

pub fn section_id(index: usize) -> String {
    format!("section-{index}")
}

pub fn get_section_title(id: &str) -> String {
    SECTION_MAP
        .iter()
        .find(|s| s.id == id)
        .map_or("Untitled", |s| s.title)
        .to_string()
}

use crate::components::navigation::SectionAnchor;

pub const PRODUCT_NAME: &str = "Framecast";

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct FaqEntry {
    /// Slug used as the element id, so `#<id>` deep-links to the answer.
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub enum LinkTarget {
    Section(SectionAnchor),
    External(&'static str),
}

pub struct FooterLink {
    pub label: &'static str,
    pub target: LinkTarget,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "fas fa-desktop",
        title: "Screen, window or tab",
        description: "Capture your whole display, a single window or just one browser tab. Pick the source when you start and switch between takes without reloading.",
    },
    Feature {
        icon: "fas fa-video",
        title: "Camera overlay",
        description: "Add your webcam as a movable bubble on top of the recording, so viewers see who is talking.",
    },
    Feature {
        icon: "fas fa-microphone",
        title: "Microphone and system audio",
        description: "Record your voice, the sound of the page you are sharing, or both mixed together.",
    },
    Feature {
        icon: "fas fa-scissors",
        title: "Trim in the browser",
        description: "Cut the start and end of a take before you export it. No second tool needed.",
    },
    Feature {
        icon: "fas fa-file-export",
        title: "Export to WebM or MP4",
        description: "Download the finished video in the format your browser encodes best.",
    },
    Feature {
        icon: "fas fa-lock",
        title: "Stays on your device",
        description: "Recordings never leave your browser. Nothing is uploaded and there is no account to create.",
    },
];

pub const STEPS: &[Step] = &[
    Step {
        title: "Choose what to share",
        description: "Press record and pick a screen, window or tab. Turn the camera and microphone on or off.",
    },
    Step {
        title: "Record",
        description: "Talk through your demo. Pause and resume whenever you need a moment.",
    },
    Step {
        title: "Trim and download",
        description: "Cut the edges, preview the result and save the file to your computer.",
    },
];

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        id: "install",
        question: "Do I need to install anything?",
        answer: "No. Everything runs in a modern desktop browser such as Chrome, Edge or Firefox.",
    },
    FaqEntry {
        id: "privacy",
        question: "Are my recordings uploaded anywhere?",
        answer: "No. Capture, editing and export all happen locally. The video only exists on your computer until you share it yourself.",
    },
    FaqEntry {
        id: "length",
        question: "How long can a recording be?",
        answer: "There is no fixed limit. Very long recordings are bounded by the memory your browser allows a single tab to use.",
    },
    FaqEntry {
        id: "mobile",
        question: "Does it work on phones?",
        answer: "Mobile browsers do not offer screen capture yet, so recording needs a desktop or laptop. You can still read this page on your phone.",
    },
    FaqEntry {
        id: "price",
        question: "What does it cost?",
        answer: "Nothing. The recorder is free to use without watermarks.",
    },
];

pub const FOOTER_LINKS: &[FooterLink] = &[
    FooterLink {
        label: "Record",
        target: LinkTarget::Section(SectionAnchor::Recorder),
    },
    FooterLink {
        label: "Features",
        target: LinkTarget::Section(SectionAnchor::Features),
    },
    FooterLink {
        label: "How it works",
        target: LinkTarget::Section(SectionAnchor::HowItWorks),
    },
    FooterLink {
        label: "FAQ",
        target: LinkTarget::Section(SectionAnchor::Faq),
    },
    FooterLink {
        label: "Browser support",
        target: LinkTarget::External(
            "https://developer.mozilla.org/en-US/docs/Web/API/Screen_Capture_API",
        ),
    },
];

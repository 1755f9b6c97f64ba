//! Static marketing copy and mock records for the welcome page.
//!
//! Everything here is immutable and defined at startup; the page never
//! mutates content. Icons reference path constants from
//! [`crate::components::icons`].

use crate::components::icons;

/// A feature highlight card.
#[derive(Clone, Copy, Debug)]
pub struct Feature {
    /// SVG path data for the card icon.
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// The four feature cards in display order.
pub static FEATURES: [Feature; 4] = [
    Feature {
        icon: icons::ICON_CALENDAR,
        title: "Smart Scheduling",
        description: "Effortlessly book, manage, and track your appointments online, anytime.",
    },
    Feature {
        icon: icons::ICON_DOCUMENT,
        title: "Unified Health Records",
        description: "Access your complete medical history, lab results, and medications in one secure place.",
    },
    Feature {
        icon: icons::ICON_USER_GROUP,
        title: "Virtual Consultations",
        description: "Connect with your provider from the comfort of your home with secure video calls.",
    },
    Feature {
        icon: icons::ICON_SPARKLES,
        title: "AI-Powered Assistance",
        description: "Get answers to your health questions and insights from our intelligent assistant.",
    },
];

/// A numbered onboarding step.
#[derive(Clone, Copy, Debug)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// The three onboarding steps in display order.
pub static HOW_IT_WORKS: [Step; 3] = [
    Step {
        number: "01",
        title: "Create Your Account",
        description: "Sign up in minutes to create your secure, personal health hub.",
    },
    Step {
        number: "02",
        title: "Connect with Your Provider",
        description: "Easily find your doctor or invite them to join the NovoPath network.",
    },
    Step {
        number: "03",
        title: "Manage Your Health",
        description: "Book appointments, message your provider, and access your records, all in one place.",
    },
];

/// A headline number for the stats band.
#[derive(Clone, Copy, Debug)]
pub struct Stat {
    /// SVG path data for the stat icon.
    pub icon: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

/// The four stats in display order.
pub static STATS: [Stat; 4] = [
    Stat {
        icon: icons::ICON_USER_GROUP,
        value: "50k+",
        label: "Patients Onboard",
    },
    Stat {
        icon: icons::ICON_BRIEFCASE,
        value: "1,200+",
        label: "Care Providers",
    },
    Stat {
        icon: icons::ICON_ACADEMIC_CAP,
        value: "40+",
        label: "Specialties Covered",
    },
    Stat {
        icon: icons::ICON_STAR,
        value: "98%",
        label: "Patient Satisfaction",
    },
];

/// One checklist entry on an audience card.
#[derive(Clone, Copy, Debug)]
pub struct AudiencePoint {
    pub heading: &'static str,
    pub detail: &'static str,
}

/// An audience card ("For Patients" / "For Providers") with its checklist.
#[derive(Clone, Copy, Debug)]
pub struct Audience {
    pub title: &'static str,
    pub points: [AudiencePoint; 3],
}

/// The two audience cards in display order.
pub static AUDIENCES: [Audience; 2] = [
    Audience {
        title: "For Patients",
        points: [
            AudiencePoint {
                heading: "24/7 Access",
                detail: "Your complete health history, lab results, and medications at your fingertips.",
            },
            AudiencePoint {
                heading: "Direct Communication",
                detail: "Securely message your providers anytime, anywhere.",
            },
            AudiencePoint {
                heading: "Seamless Experience",
                detail: "Easily schedule appointments, join video calls, and handle payments.",
            },
        ],
    },
    Audience {
        title: "For Providers",
        points: [
            AudiencePoint {
                heading: "Efficient Workflow",
                detail: "Manage patients, appointments, and progress notes from a unified dashboard.",
            },
            AudiencePoint {
                heading: "Integrated Tools",
                detail: "Utilize built-in telehealth, e-prescribing, and billing to save time.",
            },
            AudiencePoint {
                heading: "Grow Your Practice",
                detail: "Access advanced analytics to understand your patient population and improve care.",
            },
        ],
    },
];

/// A testimonial shown on the welcome page. `rating` is a 0-5 star count.
#[derive(Clone, Copy, Debug)]
pub struct Testimonial {
    pub name: &'static str,
    pub avatar_url: &'static str,
    pub role: &'static str,
    pub rating: u8,
    pub feedback: &'static str,
}

/// Mock testimonials; exactly three records.
pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "John Doe",
        avatar_url: "https://picsum.photos/seed/patient1/100",
        role: "Patient",
        rating: 5,
        feedback: "NovoPath has revolutionized how I manage my health. Everything is in one place, from my appointments to my lab results. It's so empowering!",
    },
    Testimonial {
        name: "Dr. Jane Smith",
        avatar_url: "https://picsum.photos/seed/provider1/100",
        role: "Cardiologist",
        rating: 5,
        feedback: "As a provider, this platform has saved me hours of administrative work. The patient management tools are fantastic and let me focus more on care.",
    },
    Testimonial {
        name: "Maria Garcia",
        avatar_url: "https://picsum.photos/seed/patient2/100",
        role: "Care Coordinator",
        rating: 4,
        feedback: "Coordinating care across several specialists used to mean endless phone calls. Now the whole team works from the same records.",
    },
];

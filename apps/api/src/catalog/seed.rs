// Fixed directory contents. Dates are campus-local, `YYYY-MM-DDTHH:MM:SS`.

pub struct SeedEvent {
    pub id: &'static str,
    pub name: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub ai_hint: &'static str,
}

pub const SEED_EVENTS: &[SeedEvent] = &[
    SeedEvent {
        id: "tech-innovators-summit",
        name: "Tech Innovators Summit",
        date: "2026-11-05T10:00:00",
        location: "Main Auditorium",
        description: "Student founders and industry engineers demo what they have been building, \
            followed by lightning talks on AI tooling, robotics and open source.",
        category: "Tech",
        image: "https://placehold.co/600x400.png",
        ai_hint: "technology conference",
    },
    SeedEvent {
        id: "fall-music-fest",
        name: "Fall Music Fest",
        date: "2026-11-07T18:30:00",
        location: "Central Lawn",
        description: "An evening of live sets from campus bands and DJs, with food stalls \
            run by student clubs.",
        category: "Music",
        image: "https://placehold.co/600x400.png",
        ai_hint: "music festival",
    },
    SeedEvent {
        id: "modern-art-showcase",
        name: "Modern Art Showcase",
        date: "2026-11-12T16:00:00",
        location: "Fine Arts Gallery",
        description: "Paintings, installations and digital pieces from the fine arts \
            department's graduating cohort.",
        category: "Art",
        image: "https://placehold.co/600x400.png",
        ai_hint: "art gallery",
    },
    SeedEvent {
        id: "career-fair-2026",
        name: "Autumn Career Fair",
        date: "2026-11-12T09:30:00",
        location: "Convention Hall B",
        description: "Meet recruiters from over forty companies hiring interns and graduates. \
            Bring printed copies of your resume.",
        category: "Career",
        image: "https://placehold.co/600x400.png",
        ai_hint: "career fair",
    },
    SeedEvent {
        id: "inter-college-football",
        name: "Inter-College Football Final",
        date: "2026-11-15T15:00:00",
        location: "University Stadium",
        description: "The league final between the engineering and business colleges. \
            Wear your college colours.",
        category: "Sports",
        image: "https://placehold.co/600x400.png",
        ai_hint: "football match",
    },
    SeedEvent {
        id: "hackathon-24h",
        name: "24-Hour Hackathon",
        date: "2026-11-20T09:00:00",
        location: "Innovation Lab",
        description: "Form a team, pick a campus problem and ship a prototype in a day. \
            Mentors, meals and prizes provided.",
        category: "Tech",
        image: "https://placehold.co/600x400.png",
        ai_hint: "coding hackathon",
    },
    SeedEvent {
        id: "international-food-night",
        name: "International Food Night",
        date: "2026-11-22T19:00:00",
        location: "Student Union Hall",
        description: "Student associations cook dishes from home. Tasting tokens are \
            free for registered attendees.",
        category: "Social",
        image: "https://placehold.co/600x400.png",
        ai_hint: "food festival",
    },
    SeedEvent {
        id: "resume-workshop",
        name: "Resume Writing Workshop",
        date: "2026-12-01T14:00:00",
        location: "Library Seminar Room 2",
        description: "Career services walks through resume structure and reviews drafts \
            one-on-one in the second half.",
        category: "Career",
        image: "https://placehold.co/600x400.png",
        ai_hint: "workshop classroom",
    },
];

//! Counselor lines.

/// Shown when a new semester starts.
pub const WELCOME: &str = "Welcome to college! Pick 3 activities to start your semester.";

/// Shown while the counselor is working on a turn.
pub const THINKING: &str = "The counselor is thinking about your choices...";

/// Replaces commentary that failed to arrive.
pub const OFFLINE: &str = "The counselor is offline for a moment.";

/// Used if no template matched at all.
pub const KEEP_GOING: &str = "Keep going!";

pub const BROKE: &[&str] = &[
    "Are you living on instant noodles lately? Maybe look into a work-study job at the cafeteria.",
    "Your wallet is cleaner than my desk. Maybe skip the social events for a while.",
    "Financial crisis warning! Switch to survival mode this week and stop the spending.",
    "Earn something soon, or you won't even afford to print your thesis.",
];

pub const LOW_MOOD: &[&str] = &[
    "You look like a storm cloud. Too much pressure lately? Go run a couple of laps.",
    "Mental health matters! Don't tough it out alone, come by my office and talk.",
    "Don't push yourself so hard. College isn't only about grades; being happy matters most.",
    "Something's off. Pet a cat or sleep in this week and get some energy back.",
];

pub const EXHAUSTED: &[&str] = &[
    "Are you trying to ascend to immortality? Sleep, or you'll be the next cautionary headline.",
    "Your body is your capital. At this rate you'll pass out in lecture.",
    "Less all-nighters! Less all-nighters! Less all-nighters! Important things get said three times.",
    "Your dark circles have reached your chin. Go rest, now!",
];

pub const STUDY_HEAVY: &[&str] = &[
    "Studying this much? Grad school is a lock. Just don't study yourself silly.",
    "So this is the legendary grind king. Do you own the library now?",
    "The top-student image stays strong. Remember to rest, don't wreck your health.",
    "I'm betting on you for the national scholarship, but wasn't this week a bit much?",
];

pub const LEISURE_HEAVY: &[&str] = &[
    "Having a blast, huh? How's finals prep going?",
    "College is free and easy, but you can't coast like this every day.",
    "Failing-grade alert! Have fun, but crack a book too.",
    "Quite the comfortable week. Even I'm jealous.",
];

pub const WORK_HEAVY: &[&str] = &[
    "Only seeing money now? Earning matters, but classes are the main job.",
    "So young and such a head for business. Don't forget me when you're rich.",
    "Are you the king of part-time jobs? Look after yourself, don't burn out.",
    "Working this hard, are you planning to buy an apartment in this city?",
];

pub const SOCIAL_HEAVY: &[&str] = &[
    "You must be the social butterfly. Is there anyone on campus you don't know?",
    "Connections matter, but pointless socializing wastes time too.",
    "Parties every day. Can your wallet take it? Can your liver?",
    "Looks like this week's main task was getting your face known.",
];

pub const BALANCED: &[&str] = &[
    "A steady, sensible week. Keep it up.",
    "College is for trying things, and your choices are interesting.",
    "Looks like you've settled into the rhythm of college. Nice.",
    "This is what a full, colorful college life looks like. Keep going!",
    "As long as you don't fail anything, every week is a great week.",
    "Your choices shape your future, but as long as this week was fun, that's fine.",
];

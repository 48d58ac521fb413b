pub const FIRST_NAMES: &[&str] = &[
    "James",
    "John",
    "Robert",
    "Michael",
    "William",
    "David",
    "Richard",
    "Joseph",
    "Thomas",
    "Charles",
    "Mary",
    "Patricia",
    "Jennifer",
    "Linda",
    "Elizabeth",
    "Barbara",
    "Susan",
    "Jessica",
    "Sarah",
    "Karen",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Jones",
    "Garcia",
    "Miller",
    "Davis",
    "Rodriguez",
    "Martinez",
    "Hernandez",
    "Lopez",
    "Gonzalez",
    "Wilson",
    "Anderson",
    "Thomas",
    "Taylor",
    "Moore",
    "Jackson",
    "Martin",
];

pub const CLASS_LABELS: &[&str] = &[
    "Grade 10(1)",
    "Grade 10(2)",
    "Grade 10(3)",
    "Grade 10(4)",
    "Grade 10(5)",
    "Grade 11(1)",
    "Grade 11(2)",
    "Grade 11(3)",
    "Grade 11(4)",
    "Grade 11(5)",
    "Grade 12(1)",
    "Grade 12(2)",
    "Grade 12(3)",
    "Grade 12(4)",
    "Grade 12(5)",
];

/// Label that selects uniform class assignment instead of a fixed class.
pub const RANDOM_CLASS_LABEL: &str = "Random Assignment";

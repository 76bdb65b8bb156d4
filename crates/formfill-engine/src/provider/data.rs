//! Static data tables backing the provider's locale-flavored generators.

pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

pub const CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't',
    'v', 'w', 'x', 'y', 'z',
];

pub const ALPHABET: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Lorem-style dictionary used for phrases, sentences, and paragraphs.
pub const WORD_BANK: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit",
    "sed", "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore",
    "magna", "aliqua", "enim", "ad", "minim", "veniam", "quis", "nostrud",
    "exercitation", "ullamco", "laboris", "nisi", "aliquip", "ex", "ea", "commodo",
    "consequat", "duis", "aute", "irure", "in", "reprehenderit", "voluptate",
    "velit", "esse", "cillum", "eu", "fugiat", "nulla", "pariatur", "excepteur",
    "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
    "officia", "deserunt", "mollit", "anim", "id", "est", "laborum", "at", "vero",
    "eos", "accusamus", "iusto", "odio", "dignissimos", "ducimus", "blanditiis",
    "praesentium", "voluptatum", "deleniti", "atque", "corrupti", "quos", "quas",
    "molestias", "recusandae", "itaque", "earum", "hic", "tenetur", "sapiente",
    "delectus", "reiciendis", "voluptatibus", "maiores", "alias", "perferendis",
    "doloribus", "asperiores", "repellat",
];

pub const FIRST_NAMES: &[&str] = &[
    "Oliver", "Charlotte", "Jack", "Amelia", "William", "Olivia", "Noah", "Isla",
    "Thomas", "Mia", "James", "Grace", "Lucas", "Ava", "Henry", "Chloe", "Ethan",
    "Sophie", "Mason", "Ella", "Alexander", "Ruby", "Harrison", "Zoe", "Leo",
    "Evie", "Samuel", "Matilda", "Archie", "Sienna", "Oscar", "Ivy", "Hunter",
    "Willow", "Levi", "Harper", "Daniel", "Audrey", "Hugo", "Lily",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Jones", "Williams", "Brown", "Wilson", "Taylor", "Johnson", "White",
    "Martin", "Anderson", "Thompson", "Nguyen", "Ryan", "Walker", "Harris", "Lee",
    "King", "Wright", "Kelly", "Hall", "Young", "Clarke", "Scott", "Mitchell",
    "Robinson", "Carter", "Phillips", "Turner", "Evans", "Cooper", "Bennett",
    "Murphy", "Bailey", "Collins", "Cox", "Richards", "Webb", "Murray", "Palmer",
    "Griffin",
];

pub const COMPANY_SUFFIXES: &[&str] = &[
    "Pty Ltd", "Group", "Holdings", "Partners", "Industries", "Labs", "Logistics",
    "Consulting", "Trading Co", "and Sons",
];

pub const STREET_NAMES: &[&str] = &[
    "High", "Station", "Church", "Victoria", "George", "King", "Queen", "Elizabeth",
    "Park", "Beach", "Chapel", "Bourke", "Collins", "Flinders", "Pitt", "Oxford",
    "Crown", "York", "Hunter", "Market", "Spring", "Wattle", "Banksia", "Acacia",
    "Eucalyptus", "Jacaranda", "Miller", "Campbell", "Macquarie", "Phillip",
];

pub const STREET_TYPES: &[&str] = &[
    "Street", "Road", "Avenue", "Lane", "Parade", "Crescent", "Court", "Drive",
    "Place", "Terrace",
];

pub const TOP_LEVEL_DOMAINS: &[&str] = &[
    "com", "net", "org", "io", "dev", "info", "biz", "com.au", "net.au", "org.au",
];

/// Fixed regional country list; chosen uniformly.
pub const COUNTRIES: &[&str] = &[
    "Australia",
    "New Zealand",
    "Samoa",
    "Solomon Islands",
    "Vanuatu",
    "Timor-Leste",
    "Papua New Guinea",
    "Fiji",
    "Tonga",
    "Kiribati",
    "Tuvalu",
    "Nauru",
];

pub const MONTH_NAMES: &[&str] = &[
    "January", "February", "March", "April", "May", "June", "July", "August",
    "September", "October", "November", "December",
];

pub const MONTH_ABBREVIATIONS: &[&str] = &[
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
    "Dec",
];

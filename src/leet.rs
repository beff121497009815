// Letter to digit substitutions applied to n-gram tokens with `-O leet`
const LEET_TABLE: [(char, char); 9] = [
    ('a', '4'),
    ('b', '6'),
    ('e', '3'),
    ('g', '9'),
    ('i', '1'),
    ('o', '0'),
    ('s', '5'),
    ('t', '7'),
    ('z', '2'),
];

pub fn to_leet(token: &str) -> String {
    token.chars().map(leet_char).collect()
}

fn leet_char(c: char) -> char {
    LEET_TABLE.iter().find(|(from, _)| *from == c).map_or(c, |(_, to)| *to)
}

//! Character substitution table for lookalike generation.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Builtin mapping from a character to its visual/phonetic stand-ins.
/// Each row starts with the character itself; coverage is the Latin
/// lowercase alphabet plus the uppercase letters that have convincing
/// digit or symbol doubles.
const BUILTIN_PAIRS: &[(char, &[char])] = &[
    ('a', &['a', '4', '@', '^', 'à', 'á']),
    ('b', &['b', '8', '6', 'ß']),
    ('c', &['c', '(', '<', '¢']),
    ('d', &['d', ')']),
    ('e', &['e', '3', '€', 'ê']),
    ('f', &['f', '#', 'ƒ']),
    ('g', &['g', '9', '6', '&']),
    ('h', &['h', '#']),
    ('i', &['i', '1', '!', 'í', 'ì']),
    ('j', &['j', ';', '¿']),
    ('k', &['k']),
    ('l', &['l', '1', '|', '£']),
    ('m', &['m', 'µ']),
    ('n', &['n', 'η', 'ñ']),
    ('o', &['o', '0', '°', 'ø']),
    ('p', &['p', '¶', 'ρ']),
    ('q', &['q', '9']),
    ('r', &['r', '®']),
    ('s', &['s', '5', '$', '§']),
    ('t', &['t', '7', '+']),
    ('u', &['u', 'µ', 'ù', 'ú']),
    ('v', &['v']),
    ('w', &['w', 'ω']),
    ('x', &['x', '×', 'χ']),
    ('y', &['y', '¥', 'γ']),
    ('z', &['z', '2']),
    ('A', &['A', '4', '@']),
    ('B', &['B', '8', '6']),
    ('C', &['C', '(', '<']),
    ('E', &['E', '3']),
    ('F', &['F', '#']),
    ('G', &['G', '6', '9']),
    ('H', &['H', '#']),
    ('I', &['I', '1', '!']),
    ('L', &['L', '|']),
    ('O', &['O', '0']),
    ('Q', &['Q', '9']),
    ('S', &['S', '5', '$']),
    ('T', &['T', '7', '+']),
    ('Z', &['Z', '2']),
];

lazy_static! {
    static ref BUILTIN: SubstitutionTable = SubstitutionTable::from_pairs(BUILTIN_PAIRS);
}

/// Mapping from a character to the set of characters that may substitute
/// for it, itself included. Characters without an entry (digits,
/// punctuation, unknown symbols) resolve to the identity set `{c}`.
#[derive(Debug, Clone)]
pub struct SubstitutionTable {
    map: HashMap<char, Vec<char>>,
}

impl SubstitutionTable {
    /// The process-wide builtin table, constructed once on first use and
    /// never mutated. Safe to read from any number of threads.
    pub fn builtin() -> &'static SubstitutionTable {
        &BUILTIN
    }

    /// Build a table from `(char, variants)` rows. A row that omits its
    /// own key character gets it prepended, so [`variants_of`] always
    /// contains the character itself.
    ///
    /// [`variants_of`]: SubstitutionTable::variants_of
    pub fn from_pairs(pairs: &[(char, &[char])]) -> SubstitutionTable {
        let mut map = HashMap::with_capacity(pairs.len());
        for &(c, variants) in pairs {
            let mut list = variants.to_vec();
            if !list.contains(&c) {
                list.insert(0, c);
            }
            map.insert(c, list);
        }
        SubstitutionTable { map }
    }

    /// Substitution candidates for `c`, including `c` itself. Unknown
    /// characters fall back to the singleton `{c}`.
    pub fn variants_of(&self, c: char) -> Vec<char> {
        match self.map.get(&c) {
            Some(list) => list.clone(),
            None => vec![c],
        }
    }
}

//! MediaWiki command aliases
//!
//! Wiki markup historically accepted a number of HTML-entity style names
//! (`\alef`, `\reals`, `\larr`). They are rewritten to the TeX command a
//! stock LaTeX installation understands.

use phf::phf_map;

/// Aliases that keep their argument (`\Bbb R` becomes `\mathbb{R}`).
pub static ARGUMENT_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "Bbb" => "mathbb",
    "bold" => "mathbf",
};

/// Plain renames to another control word.
pub static LITERAL_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "alef" => "aleph",
    "alefsym" => "aleph",
    "and" => "land",
    "ang" => "angle",
    "bull" => "bullet",
    "clubs" => "clubsuit",
    "Dagger" => "ddagger",
    "diamonds" => "diamondsuit",
    "Doteq" => "doteqdot",
    "doublecap" => "Cap",
    "doublecup" => "Cup",
    "empty" => "emptyset",
    "exist" => "exists",
    "ge" => "geq",
    "gggtr" => "ggg",
    "hAar" => "Leftrightarrow",
    "Harr" => "Leftrightarrow",
    "harr" => "leftrightarrow",
    "hearts" => "heartsuit",
    "image" => "Im",
    "infin" => "infty",
    "isin" => "in",
    "Larr" => "Leftarrow",
    "lArr" => "Leftarrow",
    "larr" => "leftarrow",
    "le" => "leq",
    "Lrarr" => "Leftrightarrow",
    "lrArr" => "Leftrightarrow",
    "lrarr" => "leftrightarrow",
    "ne" => "neq",
    "O" => "emptyset",
    "or" => "lor",
    "part" => "partial",
    "plusmn" => "pm",
    "Rarr" => "Rightarrow",
    "rArr" => "Rightarrow",
    "rarr" => "rightarrow",
    "real" => "Re",
    "restriction" => "upharpoonright",
    "sdot" => "cdot",
    "sect" => "S",
    "spades" => "spadesuit",
    "sub" => "subset",
    "sube" => "subseteq",
    "supe" => "supseteq",
    "thetasym" => "vartheta",
    "weierp" => "wp",
};

/// Aliases expanding to a boxed character; the value is the command body
/// without the leading backslash.
pub static BOX_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "Alpha" => "mathrm{A}",
    "Beta" => "mathrm{B}",
    "C" => "mathbb{C}",
    "Chi" => "mathrm{X}",
    "cnums" => "mathbb{C}",
    "Complex" => "mathbb{C}",
    "Epsilon" => "mathrm{E}",
    "Eta" => "mathrm{H}",
    "H" => "mathbb{H}",
    "Iota" => "mathrm{I}",
    "Kappa" => "mathrm{K}",
    "Mu" => "mathrm{M}",
    "N" => "mathbb{N}",
    "natnums" => "mathbb{N}",
    "Nu" => "mathrm{N}",
    "Omicron" => "mathrm{O}",
    "omicron" => "mathrm{o}",
    "Q" => "mathbb{Q}",
    "R" => "mathbb{R}",
    "Reals" => "mathbb{R}",
    "reals" => "mathbb{R}",
    "Rho" => "mathrm{P}",
    "Tau" => "mathrm{T}",
    "varcoppa" => "mbox{coppa}",
    "Z" => "mathbb{Z}",
    "Zeta" => "mathrm{Z}",
};

/// Arrow and angle aliases that are also valid delimiters.
pub static DELIMITER_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "Darr" => "Downarrow",
    "dArr" => "Downarrow",
    "darr" => "downarrow",
    "lang" => "langle",
    "rang" => "rangle",
    "Uarr" => "Uparrow",
    "uArr" => "Uparrow",
    "uarr" => "uparrow",
};

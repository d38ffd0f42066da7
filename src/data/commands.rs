//! Command classification tables
//!
//! Every command accepted inside a formula appears in exactly one of these
//! sets. The sets only decide membership; lookup priority between them lives
//! in [`crate::data::whitelist`].

use phf::phf_set;

/// Functions taking one argument (`\sqrt x`, `\mathrm{d}`).
pub static UNARY_FUNCTIONS: phf::Set<&'static str> = phf_set! {
    "acute", "bar", "bcancel", "boldsymbol", "breve", "cancel", "check", "ddot", "dot", "emph",
    "grave", "hat", "mathbb", "mathbf", "mathbin", "mathcal", "mathclose", "mathfrak", "mathit",
    "mathop", "mathopen", "mathord", "mathpunct", "mathrel", "mathrm", "mathsf", "mathtt",
    "overbrace", "overleftarrow", "overleftrightarrow", "overline", "overrightarrow", "pmod",
    "sqrt", "textbf", "textit", "textrm", "textsf", "texttt", "tilde", "underbrace",
    "underline", "vec", "widehat", "widetilde", "xcancel", "xleftarrow", "xrightarrow",
};

/// Functions taking two arguments (`\frac12`, `\binom nk`).
pub static BINARY_FUNCTIONS: phf::Set<&'static str> = phf_set! {
    "binom", "cancelto", "cfrac", "dbinom", "dfrac", "frac", "overset", "stackrel", "tbinom",
    "tfrac", "underset",
};

/// Sizing commands applied to the delimiter that follows them.
pub static BIG_DELIMITERS: phf::Set<&'static str> = phf_set! {
    "Big", "Bigg", "Biggl", "Biggr", "Bigl", "Bigr", "big", "bigg", "biggl", "biggr", "bigl",
    "bigr",
};

/// Old-style font switches, treated as one-argument commands.
pub static DECLARATIONS: phf::Set<&'static str> = phf_set! {
    "bf", "cal", "it", "rm",
};

/// Symbols and letters rendered as-is.
pub static LITERALS: phf::Set<&'static str> = phf_set! {
    "AA", "And", "Bbbk", "Box", "Bumpeq", "Cap", "Coppa", "Cup", "Delta", "Diamond", "Digamma",
    "Finv", "Game", "Gamma", "Im", "Koppa", "Lambda", "Leftarrow", "Leftrightarrow",
    "Lleftarrow", "Longleftarrow", "Longleftrightarrow", "Longrightarrow", "Lsh", "Omega", "P",
    "Phi", "Pi", "Psi", "Re", "Rightarrow", "Rrightarrow", "Rsh", "S", "Sampi", "Sigma",
    "Stigma", "Subset", "Supset", "Theta", "Upsilon", "Vdash", "Vvdash", "Xi", "aleph", "alpha",
    "amalg", "angle", "approx", "approxeq", "ast", "asymp", "backepsilon", "backprime",
    "backsim", "backsimeq", "barwedge", "because", "beta", "beth", "between", "bigcap",
    "bigcirc", "bigcup", "bigodot", "bigoplus", "bigotimes", "bigsqcup", "bigstar",
    "bigtriangledown", "bigtriangleup", "biguplus", "bigvee", "bigwedge", "blacklozenge",
    "blacksquare", "blacktriangle", "blacktriangledown", "blacktriangleleft",
    "blacktriangleright", "bot", "bowtie", "boxdot", "boxminus", "boxplus", "boxtimes",
    "bullet", "bumpeq", "cap", "cdot", "cdots", "centerdot", "checkmark", "chi", "circ",
    "circeq", "circlearrowleft", "circlearrowright", "circledS", "circledast", "circledcirc",
    "circleddash", "clubsuit", "colon", "complement", "cong", "coppa", "coprod", "cup",
    "curlyeqprec", "curlyeqsucc", "curlyvee", "curlywedge", "curvearrowleft", "curvearrowright",
    "dagger", "daleth", "dashv", "ddagger", "ddots", "delta", "diagdown", "diagup", "diamond",
    "diamondsuit", "digamma", "div", "divideontimes", "doteq", "doteqdot", "dotplus", "dots",
    "dotsb", "dotsc", "dotsi", "dotsm", "dotso", "doublebarwedge", "downdownarrows",
    "downharpoonleft", "downharpoonright", "ell", "emptyset", "epsilon", "eqcirc", "eqsim",
    "eqslantgtr", "eqslantless", "equiv", "eta", "eth", "euro", "exists", "fallingdotseq",
    "flat", "forall", "frown", "gamma", "geneuro", "geneuronarrow", "geneurowide", "geq",
    "geqq", "geqslant", "gets", "gg", "ggg", "gimel", "gnapprox", "gneq", "gneqq", "gnsim",
    "gtrapprox", "gtrdot", "gtreqless", "gtreqqless", "gtrless", "gtrsim", "gvertneqq", "hbar",
    "heartsuit", "hookleftarrow", "hookrightarrow", "hslash", "iff", "iiiint", "iiint", "iint",
    "imath", "implies", "in", "infty", "int", "intercal", "iota", "jmath", "kappa", "koppa",
    "lambda", "land", "ldots", "leftarrow", "leftarrowtail", "leftharpoondown", "leftharpoonup",
    "leftleftarrows", "leftrightarrow", "leftrightarrows", "leftrightharpoons",
    "leftrightsquigarrow", "leftthreetimes", "leq", "leqq", "leqslant", "lessapprox", "lessdot",
    "lesseqgtr", "lesseqqgtr", "lessgtr", "lesssim", "ll", "lll", "lnapprox", "lneq", "lneqq",
    "lnot", "lnsim", "longleftarrow", "longleftrightarrow", "longmapsto", "longrightarrow",
    "looparrowleft", "looparrowright", "lor", "lozenge", "ltimes", "lvertneqq", "mapsto",
    "measuredangle", "mho", "mid", "mod", "models", "mp", "mu", "multimap", "nLeftarrow",
    "nLeftrightarrow", "nRightarrow", "nVDash", "nVdash", "nabla", "natural", "ncong",
    "nearrow", "neg", "neq", "nexists", "ngeq", "ngeqq", "ngeqslant", "ngtr", "ni",
    "nleftarrow", "nleftrightarrow", "nleq", "nleqq", "nleqslant", "nless", "nmid", "notin",
    "nparallel", "nprec", "npreceq", "nrightarrow", "nshortmid", "nshortparallel", "nsim",
    "nsubseteq", "nsubseteqq", "nsucc", "nsucceq", "nsupseteq", "nsupseteqq", "ntriangleleft",
    "ntrianglelefteq", "ntriangleright", "ntrianglerighteq", "nu", "nvDash", "nvdash",
    "nwarrow", "odot", "officialeuro", "oint", "omega", "ominus", "oplus", "oslash", "otimes",
    "parallel", "partial", "perp", "phi", "pi", "pitchfork", "pm", "prec", "precapprox",
    "preccurlyeq", "preceq", "precnapprox", "precneqq", "precnsim", "precsim", "prime", "prod",
    "propto", "psi", "qquad", "quad", "rho", "rightarrow", "rightarrowtail", "rightharpoondown",
    "rightharpoonup", "rightleftarrows", "rightleftharpoons", "rightrightarrows",
    "rightsquigarrow", "rightthreetimes", "risingdotseq", "rtimes", "sampi", "searrow",
    "setminus", "sharp", "shortmid", "shortparallel", "sigma", "sim", "simeq", "smallfrown",
    "smallsetminus", "smallsmile", "smile", "spadesuit", "sphericalangle", "sqcap", "sqcup",
    "sqsubset", "sqsubseteq", "sqsupset", "sqsupseteq", "square", "star", "stigma", "subset",
    "subseteq", "subseteqq", "subsetneq", "subsetneqq", "succ", "succapprox", "succcurlyeq",
    "succeq", "succnapprox", "succneqq", "succnsim", "succsim", "sum", "supset", "supseteq",
    "supseteqq", "supsetneq", "supsetneqq", "surd", "swarrow", "tau", "textvisiblespace",
    "therefore", "theta", "thickapprox", "thicksim", "times", "to", "top", "triangle",
    "triangledown", "triangleleft", "trianglelefteq", "triangleq", "triangleright",
    "trianglerighteq", "twoheadleftarrow", "twoheadrightarrow", "upharpoonleft",
    "upharpoonright", "uplus", "upsilon", "upuparrows", "vDash", "varepsilon", "varkappa",
    "varnothing", "varphi", "varpi", "varpropto", "varrho", "varsigma", "varstigma",
    "varsubsetneq", "varsubsetneqq", "varsupsetneq", "varsupsetneqq", "vartheta", "vartriangle",
    "vartriangleleft", "vartriangleright", "vdash", "vdots", "vee", "veebar", "wedge", "wp",
    "wr", "xi", "zeta",
};

/// Named operators (`\sin`, `\lim`). They take no argument.
pub static NAMED_FUNCTIONS: phf::Set<&'static str> = phf_set! {
    "Pr", "arccos", "arcsin", "arctan", "arg", "cos", "cosh", "cot", "coth", "csc", "deg",
    "det", "dim", "exp", "gcd", "hom", "inf", "injlim", "ker", "lg", "lim", "liminf", "limsup",
    "ln", "log", "max", "min", "projlim", "sec", "sin", "sinh", "sup", "tan", "tanh",
    "varinjlim", "varliminf", "varlimsup", "varprojlim",
};

/// Delimiters usable after `\left`, `\right` and the `\big` family.
pub static DELIMITERS: phf::Set<&'static str> = phf_set! {
    "Downarrow", "Uparrow", "Updownarrow", "Vert", "backslash", "downarrow", "lVert", "langle",
    "lbrace", "lbrack", "lceil", "lfloor", "llcorner", "lrcorner", "rVert", "rangle", "rbrace",
    "rbrack", "rceil", "rfloor", "ulcorner", "uparrow", "updownarrow", "urcorner", "vert",
};

/// Generalized fractions and infix operators.
pub static INFIX_OPERATORS: phf::Set<&'static str> = phf_set! {
    "atop", "bmod", "choose", "over",
};

/// Keywords passed through untouched, including commands whose arguments
/// must not be rebraced (`\operatorname*{…}`, `\color{red}`).
pub static KEYWORDS: phf::Set<&'static str> = phf_set! {
    "color", "definecolor", "displaystyle", "hline", "left", "limits", "nolimits", "not",
    "operatorname", "pagecolor", "right", "scriptscriptstyle", "scriptstyle", "sideset",
    "textstyle", "vline",
};

/// Commands whose argument is copied verbatim as text (`\text{if }`).
pub static TEXT_COMMANDS: phf::Set<&'static str> = phf_set! {
    "hbox", "mbox", "text", "vbox",
};

/// Functions that accept a bracketed optional argument before the
/// mandatory one (`\sqrt[3]{x}`).
pub static OPTIONAL_ARGUMENT: phf::Set<&'static str> = phf_set! {
    "sqrt", "xleftarrow", "xrightarrow",
};

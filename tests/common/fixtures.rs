//! Static datasets used across harnesses.
//!
//! `CORPUS_TSV` is a small slice of the Latinismi index shaped like the real
//! export: Italian headers, en-dash and hyphen ranges, `?` placeholders,
//! zero-padded columns and a reversed range.

/// Header line of [`CORPUS_TSV`], in column order.
pub const HEADERS: &[&str] = &[
    "Titolo articolo",
    "Volume",
    "Fascicolo",
    "Data pubbl.",
    "Nr. col. inizio",
    "Nr. col. fine",
    "Autore1",
    "Autore2",
];

/// Six articles. Row order is load order; tests refer to rows by title.
pub const CORPUS_TSV: &str = "\
Titolo articolo\tVolume\tFascicolo\tData pubbl.\tNr. col. inizio\tNr. col. fine\tAutore1\tAutore2
Abbreviatura\t1\t1\t1979\t1\t12\tPfister\t
De lingua latina\t1-2\t3\t1979-1980\t13\t40\tRossi\tBianchi
Varia\t5\t?\t1984\t7\t7\tBianchi\t
Ad hoc\t3–4\t10\t1982\t100\t120\tSchweickard\tPfister
Lingua e dialetto\t2\t4\t\t41\t60\trossi\t
Cum grano salis\t9-3\t2\t1990\t05\t09\t?\t
";

/// Titles of [`CORPUS_TSV`] in load order.
pub const TITLES: &[&str] = &[
    "Abbreviatura",
    "De lingua latina",
    "Varia",
    "Ad hoc",
    "Lingua e dialetto",
    "Cum grano salis",
];

/// The two-row dataset from the end-to-end scenario.
pub const SCENARIO_TSV: &str = "\
Volume\tAutore1\tTitolo articolo
1-2\tRossi\tDe Lingua
5\tBianchi\tVaria
";

/// Default deep-link prefix, shared by link assertions.
pub const LINK_PREFIX: &str = "https://stampa.lei-digitale.it/volumes/?sector=germanismi";

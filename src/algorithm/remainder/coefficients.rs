//! Haselgrove coefficient tables for the Riemann-Siegel remainder
//!
//! Power-series coefficients of the five Cj terms in the variable (1-2P),
//! from Haselgrove's published tables. Each Cj is an entire function; C0, C2
//! and C4 are even (coefficients occupy even power slots), C1 and C3 odd
//! (odd slots). The nonzero-term counts per Cj are fixed mathematical
//! constants of the tables: 20, 20, 19, 17 and 16.
//!
//! The same published 20-digit values appear twice: as `f64` literals for
//! the fast tier (which rounds them to 53 bits) and as decimal strings the
//! 128-bit tier parses once per process. The full-precision tier uses the
//! longer Gabcke table in [`super::gabcke_coefficients`] instead.

/// Nonzero coefficients per Cj term
pub const CJ_COEFF_COUNT: [usize; 5] = [20, 20, 19, 17, 16];

/// Powers of (1-2P) required by the table: exponents 0 through 39
pub const POWERS_OF_P: usize = 40;

/// Haselgrove table as native floats
pub const CJ_COEFF: [[f64; 20]; 5] = [
    // C0: even powers of (1-2P)
    [
        0.38268343236508977173,
        0.43724046807752044936,
        0.13237657548034352333,
        -0.01360502604767418865,
        -0.01356762197010358088,
        -0.00162372532314446528,
        0.00029705353733379691,
        0.00007943300879521469,
        0.00000046556124614504,
        -0.00000143272516309551,
        -0.00000010354847112314,
        0.00000001235792708384,
        0.00000000178810838577,
        -0.00000000003391414393,
        -0.00000000001632663392,
        -0.00000000000037851094,
        0.00000000000009327423,
        0.00000000000000522184,
        -0.00000000000000033506,
        -0.00000000000000003412,
    ],
    // C1: odd powers of (1-2P)
    [
        0.02682510262837535,
        -0.01378477342635185,
        -0.03849125048223508,
        -0.00987106629906208,
        0.00331075976085840,
        0.00146478085779542,
        0.00001320794062488,
        -0.00005922748701847,
        -0.00000598024258537,
        0.00000096413224562,
        0.00000018334733722,
        -0.00000000446708757,
        -0.00000000270963509,
        -0.00000000007785289,
        0.00000000002343763,
        0.00000000000158302,
        -0.00000000000012120,
        -0.00000000000001458,
        0.00000000000000029,
        0.00000000000000009,
    ],
    // C2: even powers of (1-2P)
    [
        0.005188542830293,
        0.000309465838807,
        -0.011335941078229,
        0.002233045741958,
        0.005196637408862,
        0.000343991440762,
        -0.000591064842747,
        -0.000102299725479,
        0.000020888392217,
        0.000005927665493,
        -0.000000164238384,
        -0.000000151611998,
        -0.000000005907803,
        0.000000002091151,
        0.000000000178157,
        -0.000000000016164,
        -0.000000000002380,
        0.000000000000054,
        0.000000000000020,
        0.000000000000000,
    ],
    // C3: odd powers of (1-2P)
    [
        0.0013397160907,
        -0.0037442151364,
        0.0013303178920,
        0.0022654660765,
        -0.0009548499998,
        -0.0006010038459,
        0.0001012885828,
        0.0000686573345,
        -0.0000005985366,
        -0.0000033316599,
        -0.0000002191929,
        0.0000000789089,
        0.0000000094147,
        -0.0000000009570,
        -0.0000000001876,
        0.0000000000045,
        0.0000000000022,
        0.0000000000000,
        0.0000000000000,
        0.0000000000000,
    ],
    // C4: even powers of (1-2P)
    [
        0.00046483389,
        -0.00100566074,
        0.00024044856,
        0.00102830861,
        -0.00076578609,
        -0.00020365286,
        0.00023212290,
        0.00003260215,
        -0.00002557905,
        -0.00000410746,
        0.00000117812,
        0.00000024456,
        -0.00000002392,
        -0.00000000750,
        0.00000000013,
        0.00000000014,
        0.00000000000,
        0.00000000000,
        0.00000000000,
        0.00000000000,
    ],
];

/// Haselgrove table as decimal strings, parsed by the 128-bit tier
pub const CJ_COEFF_STR: [[&str; 20]; 5] = [
    // C0
    [
        "0.38268343236508977173",
        "0.43724046807752044936",
        "0.13237657548034352333",
        "-0.01360502604767418865",
        "-0.01356762197010358088",
        "-0.00162372532314446528",
        "0.00029705353733379691",
        "0.00007943300879521469",
        "0.00000046556124614504",
        "-0.00000143272516309551",
        "-0.00000010354847112314",
        "0.00000001235792708384",
        "0.00000000178810838577",
        "-0.00000000003391414393",
        "-0.00000000001632663392",
        "-0.00000000000037851094",
        "0.00000000000009327423",
        "0.00000000000000522184",
        "-0.00000000000000033506",
        "-0.00000000000000003412",
    ],
    // C1
    [
        "0.02682510262837535",
        "-0.01378477342635185",
        "-0.03849125048223508",
        "-0.00987106629906208",
        "0.00331075976085840",
        "0.00146478085779542",
        "0.00001320794062488",
        "-0.00005922748701847",
        "-0.00000598024258537",
        "0.00000096413224562",
        "0.00000018334733722",
        "-0.00000000446708757",
        "-0.00000000270963509",
        "-0.00000000007785289",
        "0.00000000002343763",
        "0.00000000000158302",
        "-0.00000000000012120",
        "-0.00000000000001458",
        "0.00000000000000029",
        "0.00000000000000009",
    ],
    // C2
    [
        "0.005188542830293",
        "0.000309465838807",
        "-0.011335941078229",
        "0.002233045741958",
        "0.005196637408862",
        "0.000343991440762",
        "-0.000591064842747",
        "-0.000102299725479",
        "0.000020888392217",
        "0.000005927665493",
        "-0.000000164238384",
        "-0.000000151611998",
        "-0.000000005907803",
        "0.000000002091151",
        "0.000000000178157",
        "-0.000000000016164",
        "-0.000000000002380",
        "0.000000000000054",
        "0.000000000000020",
        "0.000000000000000",
    ],
    // C3
    [
        "0.0013397160907",
        "-0.0037442151364",
        "0.0013303178920",
        "0.0022654660765",
        "-0.0009548499998",
        "-0.0006010038459",
        "0.0001012885828",
        "0.0000686573345",
        "-0.0000005985366",
        "-0.0000033316599",
        "-0.0000002191929",
        "0.0000000789089",
        "0.0000000094147",
        "-0.0000000009570",
        "-0.0000000001876",
        "0.0000000000045",
        "0.0000000000022",
        "0.0000000000000",
        "0.0000000000000",
        "0.0000000000000",
    ],
    // C4
    [
        "0.00046483389",
        "-0.00100566074",
        "0.00024044856",
        "0.00102830861",
        "-0.00076578609",
        "-0.00020365286",
        "0.00023212290",
        "0.00003260215",
        "-0.00002557905",
        "-0.00000410746",
        "0.00000117812",
        "0.00000024456",
        "-0.00000002392",
        "-0.00000000750",
        "0.00000000013",
        "0.00000000014",
        "0.00000000000",
        "0.00000000000",
        "0.00000000000",
        "0.00000000000",
    ],
];

//! Natural isotopic abundance data
//!
//! Atom fractions follow the IUPAC 2016 recommendations for representative
//! isotopic compositions. Elements are ordered by atomic number and isotopes
//! by ascending mass number, which is the order expanded entries are written.

use crate::element::{Element, Isotope};

/// Shorthand for a table row
const fn iso(mass_number: u16, abundance: f64, zaid: u32) -> Isotope {
    Isotope {
        mass_number,
        abundance,
        zaid,
    }
}

/// Every element with at least one naturally occurring isotope, sorted by Z
pub(crate) static ELEMENTS: &[Element] = &[
    Element {
        z: 1,
        symbol: "H",
        name: "Hydrogen",
        isotopes: &[
            iso(1, 0.999885, 1001),
            iso(2, 0.000115, 1002),
        ],
    },
    Element {
        z: 2,
        symbol: "He",
        name: "Helium",
        isotopes: &[
            iso(3, 0.00000134, 2003),
            iso(4, 0.99999866, 2004),
        ],
    },
    Element {
        z: 3,
        symbol: "Li",
        name: "Lithium",
        isotopes: &[
            iso(6, 0.0759, 3006),
            iso(7, 0.9241, 3007),
        ],
    },
    Element {
        z: 4,
        symbol: "Be",
        name: "Beryllium",
        isotopes: &[iso(9, 1.0, 4009)],
    },
    Element {
        z: 5,
        symbol: "B",
        name: "Boron",
        isotopes: &[
            iso(10, 0.199, 5010),
            iso(11, 0.801, 5011),
        ],
    },
    Element {
        z: 6,
        symbol: "C",
        name: "Carbon",
        isotopes: &[
            iso(12, 0.9893, 6012),
            iso(13, 0.0107, 6013),
        ],
    },
    Element {
        z: 7,
        symbol: "N",
        name: "Nitrogen",
        isotopes: &[
            iso(14, 0.99636, 7014),
            iso(15, 0.00364, 7015),
        ],
    },
    Element {
        z: 8,
        symbol: "O",
        name: "Oxygen",
        isotopes: &[
            iso(16, 0.99757, 8016),
            iso(17, 0.00038, 8017),
            iso(18, 0.00205, 8018),
        ],
    },
    Element {
        z: 9,
        symbol: "F",
        name: "Fluorine",
        isotopes: &[iso(19, 1.0, 9019)],
    },
    Element {
        z: 10,
        symbol: "Ne",
        name: "Neon",
        isotopes: &[
            iso(20, 0.9048, 10020),
            iso(21, 0.0027, 10021),
            iso(22, 0.0925, 10022),
        ],
    },
    Element {
        z: 11,
        symbol: "Na",
        name: "Sodium",
        isotopes: &[iso(23, 1.0, 11023)],
    },
    Element {
        z: 12,
        symbol: "Mg",
        name: "Magnesium",
        isotopes: &[
            iso(24, 0.7899, 12024),
            iso(25, 0.1000, 12025),
            iso(26, 0.1101, 12026),
        ],
    },
    Element {
        z: 13,
        symbol: "Al",
        name: "Aluminum",
        isotopes: &[iso(27, 1.0, 13027)],
    },
    Element {
        z: 14,
        symbol: "Si",
        name: "Silicon",
        isotopes: &[
            iso(28, 0.92223, 14028),
            iso(29, 0.04685, 14029),
            iso(30, 0.03092, 14030),
        ],
    },
    Element {
        z: 15,
        symbol: "P",
        name: "Phosphorus",
        isotopes: &[iso(31, 1.0, 15031)],
    },
    Element {
        z: 16,
        symbol: "S",
        name: "Sulfur",
        isotopes: &[
            iso(32, 0.9499, 16032),
            iso(33, 0.0075, 16033),
            iso(34, 0.0425, 16034),
            iso(36, 0.0001, 16036),
        ],
    },
    Element {
        z: 17,
        symbol: "Cl",
        name: "Chlorine",
        isotopes: &[
            iso(35, 0.7576, 17035),
            iso(37, 0.2424, 17037),
        ],
    },
    Element {
        z: 18,
        symbol: "Ar",
        name: "Argon",
        isotopes: &[
            iso(36, 0.003336, 18036),
            iso(38, 0.000629, 18038),
            iso(40, 0.996035, 18040),
        ],
    },
    Element {
        z: 19,
        symbol: "K",
        name: "Potassium",
        isotopes: &[
            iso(39, 0.932581, 19039),
            iso(40, 0.000117, 19040),
            iso(41, 0.067302, 19041),
        ],
    },
    Element {
        z: 20,
        symbol: "Ca",
        name: "Calcium",
        isotopes: &[
            iso(40, 0.96941, 20040),
            iso(42, 0.00647, 20042),
            iso(43, 0.00135, 20043),
            iso(44, 0.02086, 20044),
            iso(46, 0.00004, 20046),
            iso(48, 0.00187, 20048),
        ],
    },
    Element {
        z: 21,
        symbol: "Sc",
        name: "Scandium",
        isotopes: &[iso(45, 1.0, 21045)],
    },
    Element {
        z: 22,
        symbol: "Ti",
        name: "Titanium",
        isotopes: &[
            iso(46, 0.0825, 22046),
            iso(47, 0.0744, 22047),
            iso(48, 0.7372, 22048),
            iso(49, 0.0541, 22049),
            iso(50, 0.0518, 22050),
        ],
    },
    Element {
        z: 23,
        symbol: "V",
        name: "Vanadium",
        isotopes: &[
            iso(50, 0.00250, 23050),
            iso(51, 0.99750, 23051),
        ],
    },
    Element {
        z: 24,
        symbol: "Cr",
        name: "Chromium",
        isotopes: &[
            iso(50, 0.04345, 24050),
            iso(52, 0.83789, 24052),
            iso(53, 0.09501, 24053),
            iso(54, 0.02365, 24054),
        ],
    },
    Element {
        z: 25,
        symbol: "Mn",
        name: "Manganese",
        isotopes: &[iso(55, 1.0, 25055)],
    },
    Element {
        z: 26,
        symbol: "Fe",
        name: "Iron",
        isotopes: &[
            iso(54, 0.05845, 26054),
            iso(56, 0.91754, 26056),
            iso(57, 0.02119, 26057),
            iso(58, 0.00282, 26058),
        ],
    },
    Element {
        z: 27,
        symbol: "Co",
        name: "Cobalt",
        isotopes: &[iso(59, 1.0, 27059)],
    },
    Element {
        z: 28,
        symbol: "Ni",
        name: "Nickel",
        isotopes: &[
            iso(58, 0.680769, 28058),
            iso(60, 0.262231, 28060),
            iso(61, 0.011399, 28061),
            iso(62, 0.036345, 28062),
            iso(64, 0.009256, 28064),
        ],
    },
    Element {
        z: 29,
        symbol: "Cu",
        name: "Copper",
        isotopes: &[
            iso(63, 0.6915, 29063),
            iso(65, 0.3085, 29065),
        ],
    },
    Element {
        z: 30,
        symbol: "Zn",
        name: "Zinc",
        isotopes: &[
            iso(64, 0.4917, 30064),
            iso(66, 0.2773, 30066),
            iso(67, 0.0404, 30067),
            iso(68, 0.1845, 30068),
            iso(70, 0.0061, 30070),
        ],
    },
    Element {
        z: 31,
        symbol: "Ga",
        name: "Gallium",
        isotopes: &[
            iso(69, 0.60108, 31069),
            iso(71, 0.39892, 31071),
        ],
    },
    Element {
        z: 32,
        symbol: "Ge",
        name: "Germanium",
        isotopes: &[
            iso(70, 0.2057, 32070),
            iso(72, 0.2745, 32072),
            iso(73, 0.0775, 32073),
            iso(74, 0.3650, 32074),
            iso(76, 0.0773, 32076),
        ],
    },
    Element {
        z: 33,
        symbol: "As",
        name: "Arsenic",
        isotopes: &[iso(75, 1.0, 33075)],
    },
    Element {
        z: 34,
        symbol: "Se",
        name: "Selenium",
        isotopes: &[
            iso(74, 0.0089, 34074),
            iso(76, 0.0937, 34076),
            iso(77, 0.0763, 34077),
            iso(78, 0.2377, 34078),
            iso(80, 0.4961, 34080),
            iso(82, 0.0873, 34082),
        ],
    },
    Element {
        z: 35,
        symbol: "Br",
        name: "Bromine",
        isotopes: &[
            iso(79, 0.5069, 35079),
            iso(81, 0.4931, 35081),
        ],
    },
    Element {
        z: 36,
        symbol: "Kr",
        name: "Krypton",
        isotopes: &[
            iso(78, 0.00355, 36078),
            iso(80, 0.02286, 36080),
            iso(82, 0.11593, 36082),
            iso(83, 0.11500, 36083),
            iso(84, 0.56987, 36084),
            iso(86, 0.17279, 36086),
        ],
    },
    Element {
        z: 37,
        symbol: "Rb",
        name: "Rubidium",
        isotopes: &[
            iso(85, 0.7217, 37085),
            iso(87, 0.2783, 37087),
        ],
    },
    Element {
        z: 38,
        symbol: "Sr",
        name: "Strontium",
        isotopes: &[
            iso(84, 0.0056, 38084),
            iso(86, 0.0986, 38086),
            iso(87, 0.0700, 38087),
            iso(88, 0.8258, 38088),
        ],
    },
    Element {
        z: 39,
        symbol: "Y",
        name: "Yttrium",
        isotopes: &[iso(89, 1.0, 39089)],
    },
    Element {
        z: 40,
        symbol: "Zr",
        name: "Zirconium",
        isotopes: &[
            iso(90, 0.5145, 40090),
            iso(91, 0.1122, 40091),
            iso(92, 0.1715, 40092),
            iso(94, 0.1738, 40094),
            iso(96, 0.0280, 40096),
        ],
    },
    Element {
        z: 41,
        symbol: "Nb",
        name: "Niobium",
        isotopes: &[iso(93, 1.0, 41093)],
    },
    Element {
        z: 42,
        symbol: "Mo",
        name: "Molybdenum",
        isotopes: &[
            iso(92, 0.1477, 42092),
            iso(94, 0.0923, 42094),
            iso(95, 0.1590, 42095),
            iso(96, 0.1668, 42096),
            iso(97, 0.0956, 42097),
            iso(98, 0.2419, 42098),
            iso(100, 0.0967, 42100),
        ],
    },
    Element {
        z: 44,
        symbol: "Ru",
        name: "Ruthenium",
        isotopes: &[
            iso(96, 0.0554, 44096),
            iso(98, 0.0187, 44098),
            iso(99, 0.1276, 44099),
            iso(100, 0.1260, 44100),
            iso(101, 0.1706, 44101),
            iso(102, 0.3155, 44102),
            iso(104, 0.1862, 44104),
        ],
    },
    Element {
        z: 45,
        symbol: "Rh",
        name: "Rhodium",
        isotopes: &[iso(103, 1.0, 45103)],
    },
    Element {
        z: 46,
        symbol: "Pd",
        name: "Palladium",
        isotopes: &[
            iso(102, 0.0102, 46102),
            iso(104, 0.1114, 46104),
            iso(105, 0.2233, 46105),
            iso(106, 0.2733, 46106),
            iso(108, 0.2646, 46108),
            iso(110, 0.1172, 46110),
        ],
    },
    Element {
        z: 47,
        symbol: "Ag",
        name: "Silver",
        isotopes: &[
            iso(107, 0.51839, 47107),
            iso(109, 0.48161, 47109),
        ],
    },
    Element {
        z: 48,
        symbol: "Cd",
        name: "Cadmium",
        isotopes: &[
            iso(106, 0.0125, 48106),
            iso(108, 0.0089, 48108),
            iso(110, 0.1249, 48110),
            iso(111, 0.1280, 48111),
            iso(112, 0.2413, 48112),
            iso(113, 0.1222, 48113),
            iso(114, 0.2873, 48114),
            iso(116, 0.0749, 48116),
        ],
    },
    Element {
        z: 49,
        symbol: "In",
        name: "Indium",
        isotopes: &[
            iso(113, 0.0429, 49113),
            iso(115, 0.9571, 49115),
        ],
    },
    Element {
        z: 50,
        symbol: "Sn",
        name: "Tin",
        isotopes: &[
            iso(112, 0.0097, 50112),
            iso(114, 0.0066, 50114),
            iso(115, 0.0034, 50115),
            iso(116, 0.1454, 50116),
            iso(117, 0.0768, 50117),
            iso(118, 0.2422, 50118),
            iso(119, 0.0859, 50119),
            iso(120, 0.3258, 50120),
            iso(122, 0.0463, 50122),
            iso(124, 0.0579, 50124),
        ],
    },
    Element {
        z: 51,
        symbol: "Sb",
        name: "Antimony",
        isotopes: &[
            iso(121, 0.5721, 51121),
            iso(123, 0.4279, 51123),
        ],
    },
    Element {
        z: 52,
        symbol: "Te",
        name: "Tellurium",
        isotopes: &[
            iso(120, 0.0009, 52120),
            iso(122, 0.0255, 52122),
            iso(123, 0.0089, 52123),
            iso(124, 0.0474, 52124),
            iso(125, 0.0707, 52125),
            iso(126, 0.1884, 52126),
            iso(128, 0.3174, 52128),
            iso(130, 0.3408, 52130),
        ],
    },
    Element {
        z: 53,
        symbol: "I",
        name: "Iodine",
        isotopes: &[iso(127, 1.0, 53127)],
    },
    Element {
        z: 54,
        symbol: "Xe",
        name: "Xenon",
        isotopes: &[
            iso(124, 0.000952, 54124),
            iso(126, 0.000890, 54126),
            iso(128, 0.019102, 54128),
            iso(129, 0.264006, 54129),
            iso(130, 0.040710, 54130),
            iso(131, 0.212324, 54131),
            iso(132, 0.269086, 54132),
            iso(134, 0.104357, 54134),
            iso(136, 0.088573, 54136),
        ],
    },
    Element {
        z: 55,
        symbol: "Cs",
        name: "Cesium",
        isotopes: &[iso(133, 1.0, 55133)],
    },
    Element {
        z: 56,
        symbol: "Ba",
        name: "Barium",
        isotopes: &[
            iso(130, 0.00106, 56130),
            iso(132, 0.00101, 56132),
            iso(134, 0.02417, 56134),
            iso(135, 0.06592, 56135),
            iso(136, 0.07854, 56136),
            iso(137, 0.11232, 56137),
            iso(138, 0.71698, 56138),
        ],
    },
    Element {
        z: 57,
        symbol: "La",
        name: "Lanthanum",
        isotopes: &[
            iso(138, 0.0008881, 57138),
            iso(139, 0.9991119, 57139),
        ],
    },
    Element {
        z: 58,
        symbol: "Ce",
        name: "Cerium",
        isotopes: &[
            iso(136, 0.00185, 58136),
            iso(138, 0.00251, 58138),
            iso(140, 0.88450, 58140),
            iso(142, 0.11114, 58142),
        ],
    },
    Element {
        z: 59,
        symbol: "Pr",
        name: "Praseodymium",
        isotopes: &[iso(141, 1.0, 59141)],
    },
    Element {
        z: 60,
        symbol: "Nd",
        name: "Neodymium",
        isotopes: &[
            iso(142, 0.27152, 60142),
            iso(143, 0.12174, 60143),
            iso(144, 0.23798, 60144),
            iso(145, 0.08293, 60145),
            iso(146, 0.17189, 60146),
            iso(148, 0.05756, 60148),
            iso(150, 0.05638, 60150),
        ],
    },
    Element {
        z: 62,
        symbol: "Sm",
        name: "Samarium",
        isotopes: &[
            iso(144, 0.0307, 62144),
            iso(147, 0.1499, 62147),
            iso(148, 0.1124, 62148),
            iso(149, 0.1382, 62149),
            iso(150, 0.0738, 62150),
            iso(152, 0.2675, 62152),
            iso(154, 0.2275, 62154),
        ],
    },
    Element {
        z: 63,
        symbol: "Eu",
        name: "Europium",
        isotopes: &[
            iso(151, 0.4781, 63151),
            iso(153, 0.5219, 63153),
        ],
    },
    Element {
        z: 64,
        symbol: "Gd",
        name: "Gadolinium",
        isotopes: &[
            iso(152, 0.0020, 64152),
            iso(154, 0.0218, 64154),
            iso(155, 0.1480, 64155),
            iso(156, 0.2047, 64156),
            iso(157, 0.1565, 64157),
            iso(158, 0.2484, 64158),
            iso(160, 0.2186, 64160),
        ],
    },
    Element {
        z: 65,
        symbol: "Tb",
        name: "Terbium",
        isotopes: &[iso(159, 1.0, 65159)],
    },
    Element {
        z: 66,
        symbol: "Dy",
        name: "Dysprosium",
        isotopes: &[
            iso(156, 0.00056, 66156),
            iso(158, 0.00095, 66158),
            iso(160, 0.02329, 66160),
            iso(161, 0.18889, 66161),
            iso(162, 0.25475, 66162),
            iso(163, 0.24896, 66163),
            iso(164, 0.28260, 66164),
        ],
    },
    Element {
        z: 67,
        symbol: "Ho",
        name: "Holmium",
        isotopes: &[iso(165, 1.0, 67165)],
    },
    Element {
        z: 68,
        symbol: "Er",
        name: "Erbium",
        isotopes: &[
            iso(162, 0.00139, 68162),
            iso(164, 0.01601, 68164),
            iso(166, 0.33503, 68166),
            iso(167, 0.22869, 68167),
            iso(168, 0.26978, 68168),
            iso(170, 0.14910, 68170),
        ],
    },
    Element {
        z: 69,
        symbol: "Tm",
        name: "Thulium",
        isotopes: &[iso(169, 1.0, 69169)],
    },
    Element {
        z: 70,
        symbol: "Yb",
        name: "Ytterbium",
        isotopes: &[
            iso(168, 0.00123, 70168),
            iso(170, 0.02982, 70170),
            iso(171, 0.14090, 70171),
            iso(172, 0.21690, 70172),
            iso(173, 0.16103, 70173),
            iso(174, 0.32026, 70174),
            iso(176, 0.12996, 70176),
        ],
    },
    Element {
        z: 71,
        symbol: "Lu",
        name: "Lutetium",
        isotopes: &[
            iso(175, 0.97401, 71175),
            iso(176, 0.02599, 71176),
        ],
    },
    Element {
        z: 72,
        symbol: "Hf",
        name: "Hafnium",
        isotopes: &[
            iso(174, 0.0016, 72174),
            iso(176, 0.0526, 72176),
            iso(177, 0.1860, 72177),
            iso(178, 0.2728, 72178),
            iso(179, 0.1362, 72179),
            iso(180, 0.3508, 72180),
        ],
    },
    Element {
        z: 73,
        symbol: "Ta",
        name: "Tantalum",
        isotopes: &[
            iso(180, 0.0001201, 73180),
            iso(181, 0.9998799, 73181),
        ],
    },
    Element {
        z: 74,
        symbol: "W",
        name: "Tungsten",
        isotopes: &[
            iso(180, 0.0012, 74180),
            iso(182, 0.2650, 74182),
            iso(183, 0.1431, 74183),
            iso(184, 0.3064, 74184),
            iso(186, 0.2843, 74186),
        ],
    },
    Element {
        z: 75,
        symbol: "Re",
        name: "Rhenium",
        isotopes: &[
            iso(185, 0.3740, 75185),
            iso(187, 0.6260, 75187),
        ],
    },
    Element {
        z: 76,
        symbol: "Os",
        name: "Osmium",
        isotopes: &[
            iso(184, 0.0002, 76184),
            iso(186, 0.0159, 76186),
            iso(187, 0.0196, 76187),
            iso(188, 0.1324, 76188),
            iso(189, 0.1615, 76189),
            iso(190, 0.2626, 76190),
            iso(192, 0.4078, 76192),
        ],
    },
    Element {
        z: 77,
        symbol: "Ir",
        name: "Iridium",
        isotopes: &[
            iso(191, 0.373, 77191),
            iso(193, 0.627, 77193),
        ],
    },
    Element {
        z: 78,
        symbol: "Pt",
        name: "Platinum",
        isotopes: &[
            iso(190, 0.00012, 78190),
            iso(192, 0.00782, 78192),
            iso(194, 0.32864, 78194),
            iso(195, 0.33775, 78195),
            iso(196, 0.25211, 78196),
            iso(198, 0.07356, 78198),
        ],
    },
    Element {
        z: 79,
        symbol: "Au",
        name: "Gold",
        isotopes: &[iso(197, 1.0, 79197)],
    },
    Element {
        z: 80,
        symbol: "Hg",
        name: "Mercury",
        isotopes: &[
            iso(196, 0.0015, 80196),
            iso(198, 0.0997, 80198),
            iso(199, 0.1687, 80199),
            iso(200, 0.2310, 80200),
            iso(201, 0.1318, 80201),
            iso(202, 0.2986, 80202),
            iso(204, 0.0687, 80204),
        ],
    },
    Element {
        z: 81,
        symbol: "Tl",
        name: "Thallium",
        isotopes: &[
            iso(203, 0.2952, 81203),
            iso(205, 0.7048, 81205),
        ],
    },
    Element {
        z: 82,
        symbol: "Pb",
        name: "Lead",
        isotopes: &[
            iso(204, 0.014, 82204),
            iso(206, 0.241, 82206),
            iso(207, 0.221, 82207),
            iso(208, 0.524, 82208),
        ],
    },
    Element {
        z: 83,
        symbol: "Bi",
        name: "Bismuth",
        isotopes: &[iso(209, 1.0, 83209)],
    },
    Element {
        z: 90,
        symbol: "Th",
        name: "Thorium",
        isotopes: &[iso(232, 1.0, 90232)],
    },
    Element {
        z: 91,
        symbol: "Pa",
        name: "Protactinium",
        isotopes: &[iso(231, 1.0, 91231)],
    },
    Element {
        z: 92,
        symbol: "U",
        name: "Uranium",
        isotopes: &[
            iso(234, 0.000054, 92234),
            iso(235, 0.007204, 92235),
            iso(238, 0.992742, 92238),
        ],
    },
];

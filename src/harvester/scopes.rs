/// Closed controlled vocabulary of scope-of-application categories in the
/// claims catalog. The catalog serves one page per scope; the harvester walks
/// this list in order.
pub const SCOPES_OF_APPLICATION: &[&str] = &[
    "aminozuursynthese",
    "bindweefsel",
    "bloed",
    "bloeddruk",
    "bloedglucose",
    "bloedstolling",
    "bloedvaten",
    "botten (kinderclaim)",
    "botten - collageen/bot",
    "botten - collageen/kraakbeen",
    "botten - instandhouding",
    "botten - menopauze (ziekterisicobeperkende claim)",
    "botten - opname calcium en fosfor",
    "celdeling",
    "celmembranen",
    "cholesterol - instandhouden",
    "cholesterol - verlagen (ziekterisicobeperkende claim)",
    "cognitief",
    "cognitief (kinderclaim)",
    "cysteïnesynthese",
    "dna-synthese",
    "eiwitsynthese",
    "electrolytenbalans",
    "energie",
    "fysieke prestatie",
    "fysische en cognitieve functies",
    "gewicht",
    "gewicht - vervanging 1 hoofdmaaltijd",
    "gewicht - vervanging 2 hoofdmaaltijden",
    "gezichtsvermogen - foetus/zuigelingen (kinderclaim)",
    "gezichtsvermogen - instandhouding",
    "gezichtsvermogen - zuigelingen (kinderclaim)",
    "groei (kinderclaim)",
    "haar",
    "hart",
    "hersenen - foetus/zuigelingen (kinderclaim)",
    "hersenen - instandhouding",
    "homocysteïne",
    "hormonen",
    "huid",
    "ijzer",
    "immuunsysteem (kinderclaim)",
    "immuunsysteem - fysieke inspanning",
    "immuunsysteem - normale werking",
    "jetlag",
    "lever",
    "lichaamstemperatuur",
    "macronutrienten",
    "metabolisme - eiwitten/glycogeen",
    "metabolisme - hormonen/vitd/neurotransmitters",
    "metabolisme - koolhydraat",
    "metabolisme - lipiden",
    "metabolisme - vetzuren",
    "metabolisme - vitamine a",
    "metabolisme - zuurbase",
    "metabolisme - zwavelaminozuur",
    "mond en gebit - instandhouding tanden",
    "mond en gebit - mineralisatie",
    "mond en gebit - mineralisatie/tandbederf (ziekterisicobeperkende claim)",
    "mond en gebit - monddroogte",
    "mond en gebit - plaquezuren",
    "mond en gebit - plaquezuren/tandbederf (ziekterisicobeperkende claim)",
    "mond en gebit - tandplak/kinderen (ziekterisicobeperkende claim)",
    "mond en gebit - tandvlees",
    "nagels",
    "oxidatieve schade",
    "psychologische functie",
    "regeneratie vitamine e",
    "schildklier",
    "slaap",
    "slijmvliezen",
    "spermatogenese",
    "spieren - groei",
    "spieren - herstel",
    "spieren - instandhouden",
    "spieren - valrisico (ziekterisicobeperkende claim)",
    "spieren - werking",
    "spijsvertering fecale bulk",
    "spijsvertering lactose",
    "spijsvertering overig",
    "spijsvertering transit",
    "triglyceriden",
    "vermoeidheid",
    "wateropname",
    "zenuwstelsel",
    "zuurstoftransport",
    "zwangerschap",
    "zwangerschap (ziekterisicobeperkende claim)",
];

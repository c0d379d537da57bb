//! Built-in gazetteer covering the corridors the operation runs today.
//!
//! Declaration order matters: resolution is first-match-wins, so the more
//! specific places (Tehuacán before Puebla, Córdoba before Veracruz) come
//! first. Keys and aliases are lowercase without accents; accented spellings
//! ride along as aliases because route text normalization does not strip
//! diacritics.

use super::Gazetteer;

pub fn builtin() -> Gazetteer {
    Gazetteer::builder()
        .place(
            "tehuacan",
            "Tehuacán",
            18.4617,
            -97.3928,
            "Puebla",
            &["tehuacán", "tehuacan pue"],
        )
        .place(
            "cordoba",
            "Córdoba",
            18.8842,
            -96.9256,
            "Veracruz",
            &["córdoba", "cordoba ver"],
        )
        .place(
            "orizaba",
            "Orizaba",
            18.8509,
            -97.0998,
            "Veracruz",
            &["valle de orizaba"],
        )
        .place(
            "xalapa",
            "Xalapa",
            19.5438,
            -96.9102,
            "Veracruz",
            &["jalapa", "xalapa enriquez"],
        )
        .place(
            "veracruz",
            "Veracruz",
            19.1738,
            -96.1342,
            "Veracruz",
            &["puerto de veracruz", "heroica veracruz"],
        )
        .place(
            "puebla",
            "Puebla",
            19.0414,
            -98.2063,
            "Puebla",
            &["puebla de zaragoza", "heroica puebla"],
        )
        .place(
            "tlaxcala",
            "Tlaxcala",
            19.3139,
            -98.2404,
            "Tlaxcala",
            &["tlaxcala de xicohtencatl"],
        )
        .place(
            "cdmx",
            "Ciudad de México",
            19.4326,
            -99.1332,
            "Ciudad de México",
            &["ciudad de mexico", "ciudad de méxico", "mexico city", "df"],
        )
        .place(
            "toluca",
            "Toluca",
            19.2826,
            -99.6557,
            "Estado de México",
            &["toluca de lerdo"],
        )
        .place(
            "pachuca",
            "Pachuca",
            20.1011,
            -98.7591,
            "Hidalgo",
            &["pachuca de soto"],
        )
        .place(
            "cuernavaca",
            "Cuernavaca",
            18.9242,
            -99.2216,
            "Morelos",
            &[],
        )
        .place(
            "queretaro",
            "Querétaro",
            20.5888,
            -100.3899,
            "Querétaro",
            &["querétaro", "santiago de queretaro"],
        )
        .place(
            "celaya",
            "Celaya",
            20.5235,
            -100.8157,
            "Guanajuato",
            &[],
        )
        .place(
            "leon",
            "León",
            21.1219,
            -101.6833,
            "Guanajuato",
            &["león", "leon de los aldama"],
        )
        .place(
            "san luis potosi",
            "San Luis Potosí",
            22.1565,
            -100.9855,
            "San Luis Potosí",
            &["san luis potosí", "slp"],
        )
        .place(
            "guadalajara",
            "Guadalajara",
            20.6597,
            -103.3496,
            "Jalisco",
            &["gdl", "zona metropolitana de guadalajara"],
        )
        .place(
            "monterrey",
            "Monterrey",
            25.6866,
            -100.3161,
            "Nuevo León",
            &["mty"],
        )
        .place(
            "tampico",
            "Tampico",
            22.2331,
            -97.8610,
            "Tamaulipas",
            &[],
        )
        .place(
            "oaxaca",
            "Oaxaca",
            17.0732,
            -96.7266,
            "Oaxaca",
            &["oaxaca de juarez", "oaxaca de juárez"],
        )
        .place(
            "tuxtepec",
            "Tuxtepec",
            18.0878,
            -96.1256,
            "Oaxaca",
            &["san juan bautista tuxtepec"],
        )
        .zone("centro", &["cdmx", "toluca", "pachuca", "cuernavaca", "tlaxcala"])
        .zone(
            "oriente",
            &["puebla", "tehuacan", "tlaxcala", "orizaba", "cordoba"],
        )
        .zone(
            "golfo",
            &["veracruz", "xalapa", "cordoba", "orizaba", "tampico"],
        )
        .zone("bajio", &["queretaro", "celaya", "leon", "san luis potosi"])
        .zone("occidente", &["guadalajara", "leon"])
        .zone("norte", &["monterrey", "tampico"])
        .zone("sur", &["oaxaca", "tuxtepec"])
        .build()
        .expect("builtin gazetteer is structurally valid")
}

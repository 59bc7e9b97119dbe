//! Built-in informative Q&A catalog.
//!
//! # Responsibility
//! - Hold the static question/answer pairs for low and mid displacement
//!   motorcycles, grouped by category.
//! - Resolve an exact (normalized) question to its canned answer.
//!
//! # Invariants
//! - Lookup normalizes casing and whitespace; anything short of an exact
//!   normalized match misses and falls through to the classifier.
//! - Duplicate questions (by normalized text) keep the first occurrence.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// One question with its canned answer.
#[derive(Debug, Clone, Copy)]
pub struct QaPair {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A titled group of Q&A pairs.
#[derive(Debug, Clone, Copy)]
pub struct QaCategory {
    pub title: &'static str,
    pub qas: &'static [QaPair],
}

macro_rules! qa {
    ($q:expr, $a:expr) => {
        QaPair {
            question: $q,
            answer: $a,
        }
    };
}

static CATALOG: &[QaCategory] = &[
    QaCategory {
        title: "Mantenimiento Básico Motos",
        qas: &[
            qa!(
                "¿Cada cuánto debo cambiar el aceite de mi moto?",
                "Para motos de bajo cilindraje (hasta 250cc): cada 2.000-3.000 km o 3-4 meses. Para medio cilindraje (250-500cc): cada 3.000-4.000 km o 4-6 meses. Siempre consulta el manual del fabricante."
            ),
            qa!(
                "¿Qué tipo de aceite debo usar en mi moto?",
                "Usa aceites específicos para motos con clasificación JASO MA/MA2. Para bajo cilindraje: viscosidad 10W-40. Para medio cilindraje: 15W-50. Evita aceites para autos ya que pueden dañar el embrague."
            ),
            qa!(
                "¿Cada cuánto debo limpiar y lubricar la cadena?",
                "Cada 500 km o después de circular bajo lluvia. Usa lubricante específico para cadenas y limpia con kerosene o desengrasante. Ajusta la holgura según manual (generalmente 2-3 cm)."
            ),
            qa!(
                "¿Cómo mantener la batería de mi moto?",
                "Revisa terminales limpios y apretados. Para baterías convencionales, verifica nivel de agua destilada mensualmente. Si no usas la moto por más de 15 días, desconecta la batería o usa un mantenedor."
            ),
            qa!(
                "¿Cada cuánto debo revisar los frenos?",
                "Revisa pastillas cada 5.000 km. Líquido de frenos: cambio cada 2 años o 20.000 km. Si el tacto del freno es esponjoso, purga el sistema inmediatamente."
            ),
            qa!(
                "¿Cuál es el mantenimiento básico mensual?",
                "Revisa: presión de llantas (28-30 PSI delantera, 32-34 trasera), nivel de aceite (en frío), tensión de cadena (2-3 cm), frenos, luces y espejos. Lubrica cables semanalmente."
            ),
        ],
    },
    QaCategory {
        title: "Neumáticos y Suspensión",
        qas: &[
            qa!(
                "¿Qué presión de llantas debo usar?",
                "Presión típica: delantera 28-30 PSI, trasera 32-34 PSI. Revisa en frío y ajusta según carga y tipo de conducción. Nunca excedas la presión máxima marcada en el flanco del neumático."
            ),
            qa!(
                "¿Cuándo debo cambiar los neumáticos?",
                "Cuando la profundidad del dibujo sea menor a 1.6 mm (marca TWI) o aparezcan grietas, deformaciones o desgaste irregular. Vida útil promedio: 15.000-20.000 km trasero, 20.000-25.000 km delantero."
            ),
            qa!(
                "¿Cómo saber si la suspensión necesita mantenimiento?",
                "Señales: fugas de aceite en horquilla, rebotes excesivos, ruidos al pasar baches, manejo inestable en curvas. Revisión cada 10.000 km o ante cualquier anomalía."
            ),
            qa!(
                "¿Qué significa el desgaste irregular en las llantas?",
                "Desgaste en centro: exceso de presión. Desgaste en bordes: baja presión. Desgaste en un lado: problemas de alineación o suspensión. Escalones: suspensión desgastada o mala técnica de frenado."
            ),
            qa!(
                "¿Cómo ajustar la suspensión para mi peso?",
                "Precarga del resorte: ajusta según manual (generalmente 25-30% de hundimiento con tu equipo). Amortiguación: más suave para ciudad, más dura para carretera. Registra ajustes iniciales."
            ),
        ],
    },
    QaCategory {
        title: "Motor y Transmisión",
        qas: &[
            qa!(
                "¿Por qué mi moto pierde potencia?",
                "Causas comunes: bujías desgastadas, filtro de aire sucio, carburador/inyectores obstruidos, baja compresión, escape tapado o problema en el sistema de encendido. Revisión progresiva desde lo más simple."
            ),
            qa!(
                "¿Cada cuánto cambiar bujías?",
                "Bujías convencionales: 8.000-12.000 km. Bujías de iridio: 20.000-30.000 km. Síntomas de desgaste: arranque difícil, consumos elevados, fallos en ralentí y pérdida de potencia."
            ),
            qa!(
                "¿Cómo mejorar el consumo de combustible?",
                "Mantén presión correcta de llantas, evita aceleraciones bruscas, usa marchas adecuadas (no circules a bajas revoluciones), manten filtro de aire limpio y revisa alineación y rodamientos."
            ),
            qa!(
                "¿Qué hacer si la moto se calienta mucho?",
                "Verifica nivel de refrigerante (si es líquida), limpieza de radiador, funcionamiento del electroventilador, aceite del motor y que no haya obstrucciones en entradas de aire. No circules a bajas revoluciones prolongadamente."
            ),
            qa!(
                "¿Cómo cuidar el embrague de mi moto?",
                "No descanses la mano en la palanca, cambia de marcha suavemente, no patines el embrague en pendientes y ajusta holgura de cable cada 3.000 km (1-2 cm de juego en la maneta)."
            ),
            qa!(
                "¿Por qué salta la cadena o hace ruido?",
                "Cadena estirada, piñones desgastados (dientes en \"V\"), desalineación de rueda trasera o rodamientos dañados. Revisa alineación con regla y cambia cadena y piñones juntos."
            ),
        ],
    },
    QaCategory {
        title: "Electricidad y Sistema de Encendido",
        qas: &[
            qa!(
                "¿Por qué se apaga mi moto en ralentí?",
                "Causas: bujía en mal estado, filtro de aire obstruido, mezcla incorrecta en carburador, válvula de ralentí sucia (inyección), sensor TPS descalibrado o baja compresión."
            ),
            qa!(
                "¿Cómo diagnosticar problemas eléctricos?",
                "Verifica fusibles primero, luego batería (debe tener 12.5-13V), conexiones limpias y apretadas, y tierra de motor a chasis. Usa multímetro para medir carga de alternador (13.5-14.5V en ralentí)."
            ),
            qa!(
                "¿Las luces LED consumen menos batería?",
                "Sí, consumen 60-80% menos que halógenas y duran más. Al instalarlas, verifica compatibilidad con sistema de carga y considera instalar balastos o resistencias para evitar parpadeos."
            ),
            qa!(
                "¿Por qué no enciende la moto?",
                "Verifica en orden: batería (12V mínimo), fusibles, interruptor de corte, relé de arranque, motor de arranque y compresión. Si hace clic pero no arranca: batería descargada o conexiones sueltas."
            ),
            qa!(
                "¿Por qué se descarga la batería frecuentemente?",
                "Causas: regulador dañado (sobrecarga o subcarga), consumo parásito (instalaciones mal hechas), batería vieja, conexiones oxidadas. Mide: 13.5-14.5V en ralentí, >12.5V apagada."
            ),
        ],
    },
    QaCategory {
        title: "Seguridad y Conducción",
        qas: &[
            qa!(
                "¿Qué elementos de seguridad debo revisar siempre?",
                "Checklist diario: luces (alta, baja, stop, direccionales), presión de llantas, frenos delantero y trasero, nivel de aceite, espejos ajustados y cadena con tensión correcta."
            ),
            qa!(
                "¿Cómo frenar correctamente en emergencia?",
                "Aplica 70% de fuerza en freno delantero y 30% en trasero, mantén el cuerpo recto, no cierres completamente el acelerador y mira hacia donde quieres ir, no al obstáculo. Practica en lugar seguro."
            ),
            qa!(
                "¿Qué llevar en el kit de herramientas básico?",
                "Llaves de cruz, destornilladores plano y cruz, llaves allen, pinzas, tronchacables, cinta aislante, parches para llantas, inflador portátil, fusibles de repuesto y linterna."
            ),
            qa!(
                "¿Cómo preparar la moto para un viaje largo?",
                "Revisa: neumáticos (presión y desgaste), frenos (pastillas y líquido), cadena (tensión y lubricación), niveles (aceite, refrigerante), luces, carga de batería y lleva herramientas básicas."
            ),
            qa!(
                "¿Cómo evitar que me roben la moto?",
                "Candado disco freno U-Lock, alarma con sensor de movimiento, GPS oculto, estacionar en lugares iluminados, traba de dirección siempre y cadena a objeto fijo. Seguro contra robo recomendado."
            ),
            qa!(
                "¿Qué hacer en una curva tomada muy rápido?",
                "No frenes bruscamente, inclina más el cuerpo y la moto, mira hacia la salida, mantén aceleración constante y usa todo el carril. Practica técnicas de contra-maneo en circuito."
            ),
        ],
    },
    QaCategory {
        title: "Problemas Comunes y Soluciones",
        qas: &[
            qa!(
                "¿Por qué vibra mucho el manubrio?",
                "Causas: llantas desbalanceadas, rodamientos de dirección desgastados, horquilla dañada, ruedas desalineadas o soportes del motor flojos. Revisa progresivamente desde el balanceo de ruedas."
            ),
            qa!(
                "¿Qué hacer si se pincha una llanta?",
                "No frenes bruscamente, sujeta firmemente el manubrio, reduce velocidad gradualmente y busca lugar seguro para detenerte. Usa kit de parches o llama grúa. No circules con llanta desinflada."
            ),
            qa!(
                "¿Por qué hace ruido la cadena?",
                "Cadena seca o sucia, exceso de tensión, piñones desgastados, desalineación de rueda trasera o rodamientos de rueda en mal estado. Lubrica y ajusta según manual."
            ),
            qa!(
                "¿Cómo eliminar el golpeteo en el motor?",
                "Golpeteo metálico puede ser: taqués hidráulicos (ajuste cada 10.000 km), cadena de distribución tensa, bielas o pistón desgastados. Diagnóstico profesional recomendado."
            ),
            qa!(
                "¿Por qué huele a gasolina?",
                "Fugas en mangueras, conexiones flojas en carburador/inyectores, tapa de tanque mal sellada o flotador del carburador atascado. Revisa inmediatamente por riesgo de incendio."
            ),
            qa!(
                "¿Humo blanco, azul o negro del escape?",
                "Blanco (en frío): normal condensación. Blanco (caliente): junta de culata. Azul: quema aceite (anillos o guías). Negro: mezcla rica (carburador/inyección). Revisa consumo de aceite."
            ),
        ],
    },
    QaCategory {
        title: "Documentación y Legal",
        qas: &[
            qa!(
                "¿Qué documentos debo llevar siempre en la moto?",
                "Licencia de conducción categoría A1/A2, SOAT vigente, tarjeta de propiedad o matrícula, revisión técnico-mecánica y documento de identidad. Multas por no portarlos pueden ser costosas."
            ),
            qa!(
                "¿Cada cuánto debo hacer la revisión técnico-mecánica?",
                "Primera revisión: 2 años después de matrícula. Luego: cada año para servicio público, cada 2 años para particular. Verifica fechas exactas en tu licencia de tránsito."
            ),
            qa!(
                "¿Qué cubre el SOAT para motos?",
                "Cubre gastos médicos hasta 800 SMLV por persona en accidentes de tránsito, incapacidad permanente o muerte. No cubre daños a la moto, terceros ni robos. Es obligatorio para circular."
            ),
            qa!(
                "¿Qué modificaciones son legales en mi moto?",
                "Permitidas: espejos adicionales, baúles, defensas, luces auxiliares. Prohibidas: escape ruidoso, modificaciones al motor que aumenten potencia, cambios de color sin notificar, eliminación de retrovisores."
            ),
        ],
    },
    QaCategory {
        title: "Consejos para Nuevos Motociclistas",
        qas: &[
            qa!(
                "¿Qué moto elegir para principiantes?",
                "Recomendado: 125-300cc, peso liviano, posición erguida, frenos ABS y mantenimiento económico. Marcas como Honda, Yamaha, Bajaj y Suzuki tienen buenas opciones de entrada."
            ),
            qa!(
                "¿Cómo dominar las curvas con seguridad?",
                "Frena antes de la curva, mira hacia la salida, inclina cuerpo y moto simultáneamente, mantén velocidad constante y acelera suavemente al salir. Practica en vías seguras."
            ),
            qa!(
                "¿Qué equipo de protección es esencial?",
                "Casco certificado ECE o DOT, guantes con protección, chaqueta con protecciones, pantalón resistente y botas que cubran tobillos. La ropa de protección salva vidas en caídas."
            ),
            qa!(
                "¿Cómo mejorar la visibilidad ante otros conductores?",
                "Usa chaleco reflectivo, mantén luces encendidas siempre, posiciónate en carril donde seas visible, haz señales claras y evita puntos ciegos de otros vehículos."
            ),
            qa!(
                "¿Qué hacer en caso de lluvia?",
                "Reduce velocidad, aumenta distancia de frenado, evita pintura vial y rejillas, usa trajes impermeables y revisa que las luces funcionen correctamente. Seca frenos después de cruzar charcos."
            ),
        ],
    },
    QaCategory {
        title: "Reparaciones en Casa",
        qas: &[
            qa!(
                "¿Cómo cambiar el aceite yo mismo?",
                "Calienta motor 5 min, coloca sobre caballete, quita tapa de llenado, desagota por tornillo, cambia filtro (lubrica junta), cierra todo, llena con cantidad exacta, arranca y revisa nivel en frío."
            ),
            qa!(
                "¿Cómo ajustar y lubricar la cadena?",
                "Limpia con kerosene y cepillo, seca bien, ajusta tensión (2-3 cm holgura), verifica alineación (marcas en swingarm), aplica lubricante en eslabones internos, gira rueda y elimina exceso."
            ),
            qa!(
                "¿Cómo cambiar pastillas de freno?",
                "Quita pernos de caliper, retira pastillas viejas, empuja pistones con destornillador (con reservorio abierto), limpia guías, instala pastillas nuevas, monta caliper y bombea freno antes de rodar."
            ),
            qa!(
                "¿Cómo limpiar el carburador?",
                "Cierra llave de gasolina, desconecta mangueras, quita carburador, desarma con cuidado, limpia jets con aire comprimido, revisa flotador y aguja, reassambla y ajusta mezcla. Usa kit de reparación."
            ),
            qa!(
                "¿Cómo diagnosticar y cambiar una bujía?",
                "Desconecta cable, limpia área, usa llave larga para bujías, saca y revisa color: café (bueno), negro (rica), blanco (pobre). Ajusta gap según manual, instala con torque correcto."
            ),
        ],
    },
    QaCategory {
        title: "Rendimiento y Puesta a Punto",
        qas: &[
            qa!(
                "¿Cómo aumentar la potencia legalmente?",
                "Filtro de aire de alto flujo, escape completo (homologado), reprogramación de ECU (si es inyección) y relación de transmisión más corta. Evita modificaciones que afecten emisiones. Ganancia: 5-15%."
            ),
            qa!(
                "¿Por qué mi moto consume mucho combustible?",
                "Causas: filtro de aire sucio, bujías gastadas, presión baja de llantas, frenos arrastrando, carburador mal ajustado, conducción agresiva. Revisa chispa de bujías (color café)."
            ),
            qa!(
                "¿Qué relación de transmisión elegir para ciudad?",
                "Para ciudad: piñón trasero 2-4 dientes más grande o piñón delantero 1 diente menos. Mejora aceleración pero reduce velocidad máxima. Para carretera: relación más larga."
            ),
            qa!(
                "¿Cómo mejorar la frenada?",
                "Pastillas sinterizadas, líquido de frenos DOT 4, línea de freno de acero (menos expansión), discos perforados y llantas de buena calidad. Técnica: usa 70% freno delantero, 30% trasero."
            ),
            qa!(
                "¿Cómo detectar problemas graves en el motor temprano?",
                "Señales: humo azul (quema aceite), golpeteo metálico en aceleración (bielas), pérdida excesiva de aceite, sobrecalentamiento constante. Revisión inmediata recomendada."
            ),
        ],
    },
    QaCategory {
        title: "Viajes Largos y Equipaje",
        qas: &[
            qa!(
                "¿Qué revisar antes de un viaje de más de 500 km?",
                "Checklist completo: neumáticos (presión y desgaste), frenos (pastillas y líquido), cadena (tensión y lubricación), niveles (aceite, refrigerante), luces, carga eléctrica, suspensión y documentación."
            ),
            qa!(
                "¿Cómo cargar equipaje correctamente?",
                "Peso bajo y cerca del centro, máximo 30% del peso de la moto, asegura con correas de calidad, equilibra lados, revisa anclajes frecuentemente y evita bloques altos que afecten aerodinámica."
            ),
            qa!(
                "¿Qué llevar en el kit de viaje?",
                "Kit básico de herramientas, parches para llantas, inflador, fusibles de repuesto, linterna, botiquín, documentos, agua, comida energética, cargador portátil y ropa de lluvia."
            ),
            qa!(
                "¿Cómo evitar la fatiga en viajes largos?",
                "Paradas cada 2 horas o 150 km, hidratación constante, postura relajada, estiramientos en paradas, música relajante, protección auditiva y planifica ruta con anticipación."
            ),
            qa!(
                "¿Cómo almacenar mi moto por más de 15 días?",
                "Llena el tanque, agrega estabilizador de gasolina, desconecta batería, infla llantas 5 PSI extra, limpia y lubrica cadena, coloca sobre caballete central y cubre con lona transpirable."
            ),
        ],
    },
];

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Normalized-question to answer, first occurrence wins.
static ANSWERS: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for category in CATALOG {
        for qa in category.qas {
            map.entry(normalize(qa.question)).or_insert(qa.answer);
        }
    }
    map
});

/// Lower-cases, collapses runs of whitespace and trims.
pub fn normalize(text: &str) -> String {
    WHITESPACE_RE
        .replace_all(&text.to_lowercase(), " ")
        .trim()
        .to_string()
}

/// Canned answer for an exactly matching question, if any.
pub fn answer_for(text: &str) -> Option<&'static str> {
    ANSWERS.get(&normalize(text)).copied()
}

/// The full catalog, for listing categories and their questions.
pub fn categories() -> &'static [QaCategory] {
    CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_question_resolves() {
        let answer = answer_for("¿Cada cuánto debo cambiar el aceite de mi moto?");
        assert!(answer.is_some());
        assert!(answer.unwrap().contains("2.000-3.000 km"));
    }

    #[test]
    fn lookup_ignores_casing_and_extra_spaces() {
        let direct = answer_for("¿Qué presión de llantas debo usar?");
        let noisy = answer_for("  ¿QUÉ PRESIÓN   DE LLANTAS DEBO USAR?  ");
        assert!(direct.is_some());
        assert_eq!(direct, noisy);
    }

    #[test]
    fn near_miss_falls_through() {
        assert!(answer_for("presión de llantas").is_none());
        assert!(answer_for("").is_none());
    }

    #[test]
    fn catalog_has_no_empty_entries() {
        for category in categories() {
            assert!(!category.qas.is_empty(), "{}", category.title);
            for qa in category.qas {
                assert!(!qa.question.is_empty());
                assert!(!qa.answer.is_empty());
            }
        }
    }
}

//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée, petits entiers
//! - budget temps global
//! - oracle indépendant (chaînes + i128) : '^' empilé seulement sur pile
//!   vide, somme finale ; dépassement i128 => cas ignoré AVANT le noyau

use std::time::{Duration, Instant};

use num_bigint::BigInt;

use super::erreur::ErreurCalcul;
use super::eval_expression;
use super::variables::Variables;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

const OPS: [&str; 5] = ["+", "-", "*", "/", "^"];

// '^' partout, y compris dans les groupes
fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    let mut out = gen_atome(rng, depth);
    let termes = 1 + rng.pick(3);
    for _ in 0..termes {
        let op = OPS[rng.pick(5) as usize];
        let atome = gen_atome(rng, depth);
        out.push_str(&format!(" {op} {atome}"));
    }
    out
}

fn gen_atome(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 || rng.pick(3) > 0 {
        format!("{}", rng.pick(4))
    } else {
        format!("({})", gen_expr(rng, depth - 1))
    }
}

/* ------------------------ Oracle (règle non standard, i128) ------------------------ */

fn oracle_jetons(expr: &str) -> Vec<String> {
    let mut toks = Vec::new();
    // parenthèses collées aux nombres : on les détache
    for b in expr.split_whitespace() {
        let mut courant = String::new();
        for c in b.chars() {
            if c.is_ascii_digit() {
                courant.push(c);
            } else {
                if !courant.is_empty() {
                    toks.push(std::mem::take(&mut courant));
                }
                toks.push(c.to_string());
            }
        }
        if !courant.is_empty() {
            toks.push(courant);
        }
    }
    toks
}

/// Postfix : tout opérateur arrivant sur une pile vide est empilé ; sinon
/// '^' file directement dans la queue, '(' sur la pile comptant comme non vide.
fn oracle_postfix(expr: &str) -> Vec<String> {
    let mut queue: Vec<String> = Vec::new();
    let mut pile: Vec<String> = Vec::new();
    for t in oracle_jetons(expr) {
        if t.chars().all(|c| c.is_ascii_digit()) {
            queue.push(t);
            continue;
        }
        match t.as_str() {
            "(" => pile.push(t),
            ")" => {
                while let Some(x) = pile.pop() {
                    if x == "(" {
                        break;
                    }
                    queue.push(x);
                }
            }
            _ if pile.is_empty() => pile.push(t),
            "+" | "-" => {
                while pile.last().is_some_and(|x| "+-*/".contains(x.as_str())) {
                    queue.extend(pile.pop());
                }
                pile.push(t);
            }
            "*" | "/" => {
                while pile.last().is_some_and(|x| x == "*" || x == "/") {
                    queue.extend(pile.pop());
                }
                pile.push(t);
            }
            _ => queue.push(t),
        }
    }
    while let Some(x) = pile.pop() {
        queue.push(x);
    }
    queue
}

#[derive(Debug)]
enum Oracle {
    Valeur(i128),
    DivZero,
    Exposant,
    Invalide,
    Deborde,
}

fn oracle(expr: &str) -> Oracle {
    let mut st: Vec<i128> = Vec::new();
    for t in oracle_postfix(expr) {
        if let Ok(n) = t.parse::<i128>() {
            st.push(n);
            continue;
        }
        let (Some(b), Some(a)) = (st.pop(), st.pop()) else {
            return Oracle::Invalide;
        };
        let r = match t.as_str() {
            "+" => a.checked_add(b),
            "-" => a.checked_sub(b),
            "*" => a.checked_mul(b),
            "/" => {
                if b == 0 {
                    return Oracle::DivZero;
                }
                a.checked_div(b)
            }
            "^" => match u32::try_from(b) {
                Ok(e) => a.checked_pow(e),
                Err(_) => return Oracle::Exposant,
            },
            _ => unreachable!(),
        };
        match r {
            Some(v) => st.push(v),
            None => return Oracle::Deborde,
        }
    }
    st.into_iter()
        .try_fold(0i128, |acc, v| acc.checked_add(v))
        .map_or(Oracle::Deborde, Oracle::Valeur)
}

/* ------------------------ Tests ------------------------ */

#[test]
fn oracle_caret_dans_une_parenthese() {
    assert_eq!(oracle_postfix("2 * (3 ^ 2)").join(" "), "2 3 ^ 2 *");
    assert_eq!(oracle_postfix("1 + (2 ^ 3)").join(" "), "1 2 ^ 3 +");
    assert!(matches!(oracle("2 * (3 ^ 2)"), Oracle::Valeur(16)));
    assert!(matches!(oracle("1 + (2 ^ 3)"), Oracle::Valeur(4)));
    assert!(matches!(oracle("(2 ^ 3)"), Oracle::Invalide));
}

#[test]
fn fuzz_safe_oracle_et_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let vars = Variables::new();

    let mut seen_ok = 0usize;
    let mut seen_div0 = 0usize;
    let mut seen_invalide = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 3);

        // hors i128 : le noyau pourrait lancer un '^' géant, on saute
        let attendu = oracle(&expr);
        if matches!(attendu, Oracle::Deborde) {
            continue;
        }

        let r1 = eval_expression(&expr, &vars).map(|r| r.valeur);
        let r2 = eval_expression(&expr, &vars).map(|r| r.valeur);
        assert_eq!(r1, r2, "non déterministe: expr={expr:?}");

        match (attendu, r1) {
            (Oracle::Valeur(v), Ok(n)) => {
                assert_eq!(n, BigInt::from(v), "expr={expr:?}");
                seen_ok += 1;
            }
            (Oracle::DivZero, Err(ErreurCalcul::DivisionParZero)) => seen_div0 += 1,
            (Oracle::Exposant, Err(ErreurCalcul::ExposantInvalide { .. })) => {}
            (Oracle::Invalide, Err(ErreurCalcul::ExpressionInvalide { .. })) => {
                seen_invalide += 1
            }
            (o, autre) => {
                panic!("désaccord avec l’oracle: expr={expr:?} oracle={o:?} noyau={autre:?}")
            }
        }
    }

    // On veut voir un mix, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_div0 > 0, "aucune division par zéro vue");
    assert!(seen_invalide > 0, "aucun '^' sans opérande gauche vu");
}

#[test]
fn fuzz_safe_series_de_signes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let vars = Variables::new();

    for _ in 0..200 {
        budget(t0, max);

        let a = i128::from(rng.pick(50));
        let b = i128::from(rng.pick(50));
        let op = ["+", "-", "*"][rng.pick(3) as usize];

        // série aléatoire de + / - avant b
        let mut serie = String::new();
        let mut moins = 0;
        for _ in 0..rng.pick(5) {
            if rng.pick(2) == 0 {
                serie.push('-');
                moins += 1;
            } else {
                serie.push('+');
            }
            if rng.pick(2) == 0 {
                serie.push(' ');
            }
        }
        let b_signe = if moins % 2 == 1 { -b } else { b };

        let attendu = match op {
            "+" => a + b_signe,
            "-" => a - b_signe,
            _ => a * b_signe,
        };

        let expr = format!("{a} {op} {serie}{b}");
        let v = eval_expression(&expr, &vars)
            .unwrap_or_else(|e| panic!("expr={expr:?} err={e:?}"))
            .valeur;
        assert_eq!(v, BigInt::from(attendu), "expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_imbrication_profonde() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // 2000 niveaux de parenthèses : tout est itératif, pas de récursion
    let n = 2000;
    let expr = format!("{}7{}", "(".repeat(n), ")".repeat(n));
    let v = eval_expression(&expr, &Variables::new())
        .unwrap_or_else(|e| panic!("err: {e:?}"))
        .valeur;
    budget(t0, max);
    assert_eq!(v, BigInt::from(7));

    // longue somme à plat
    let expr = vec!["1"; 800].join(" + ");
    let v = eval_expression(&expr, &Variables::new()).unwrap().valeur;
    assert_eq!(v, BigInt::from(800));

    // série de négations emboîtées : -(-(-(...)))
    let expr = format!("{}5{}", "-(".repeat(101), ")".repeat(101));
    let v = eval_expression(&expr, &Variables::new()).unwrap().valeur;
    assert_eq!(v, BigInt::from(-5));
    budget(t0, max);
}

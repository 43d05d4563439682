use renamed::sexp::Parser;
use renamed::{expand, DeclBuilder};

fn main() {
    let input = r#"
    (Renamed :from "oldSend(_:to:)"
             :decl (Function :name "send"
                             :modifiers (public)
                             :params ((Param :label "_" :name "message" :type "String")
                                      (Param :label "recipient" :type "User"))
                             :returns "Bool"))
    "#;

    println!("Expanding @Renamed function from S-expression...\n");

    let sexp = match Parser::parse_str(input) {
        Ok(sexp) => sexp,
        Err(e) => {
            eprintln!("Parse error: {}", e);
            return;
        }
    };
    println!("✓ Parsed S-expression");

    match DeclBuilder::new().build_attributed(&sexp) {
        Ok(decl) => match expand(&decl) {
            Ok(shim) => {
                println!("✓ Synthesized shim for {}\n", shim.renamed_to().unwrap_or("?"));
                println!("{}", shim);
            }
            Err(e) => eprintln!("Expansion error: {}", e.diagnostic()),
        },
        Err(e) => eprintln!("Builder error: {}", e),
    }
}

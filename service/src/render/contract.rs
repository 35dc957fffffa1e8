//! Contract narrative assembly.

use crate::{
    domain::{pricing, Contract},
    Company,
};

use super::sanitize;

/// Assembles the full contract narrative of the provided [`Contract`].
///
/// The output is a single string where `**…**` pairs mark bold segments
/// and newlines separate clauses. Free-text client fields are sanitized
/// and upper-cased on rendering only, the stored record keeps its
/// original casing. Nothing here depends on "now": rendering the same
/// [`Contract`] twice yields byte-identical output, and the current-date
/// stamp is added by the print layer.
#[must_use]
pub fn narrative(contract: &Contract, company: &Company) -> String {
    let client_name = sanitize(contract.client.name.as_ref()).to_uppercase();
    let client_address =
        sanitize(contract.client.address.as_ref()).to_uppercase();
    let event_address =
        sanitize(contract.event.address.as_ref()).to_uppercase();
    let event_date = sanitize(contract.event.date.as_ref());
    let client_rg = sanitize(contract.client.rg.as_ref());
    let client_cpf = &contract.client.cpf;

    let adults = contract.headcount.adults;
    let children = contract.headcount.children;
    let extras = contract.headcount.extra_waiters;
    let starts_at = contract.event.starts_at;
    let ends_at = contract.event.ends_at;

    let base_waiters = pricing::required_waiters(contract.headcount);
    let waiters = if extras > 0 {
        format!("{base_waiters} garçons + {extras} garçons adicionais")
    } else {
        format!("{base_waiters} garçons")
    };

    let children_guests = if children > 0 {
        format!(" e {children} crianças")
    } else {
        String::new()
    };

    let child_price = if children > 0 {
        format!(" e {} por crianças", contract.prices.per_child)
    } else {
        String::new()
    };

    let extra_waiters = if extras > 0 {
        format!(
            ", mais {extras} garçons adicionais no valor de {} cada \
             (total de {})",
            contract.prices.per_extra_waiter,
            contract.prices.per_extra_waiter * extras,
        )
    } else {
        String::new()
    };

    let per_adult = contract.prices.per_adult;
    let total = contract.totals.total;
    let down_payment = contract.totals.down_payment;
    let remaining = contract.totals.remaining();

    let company_name = &company.name;
    let company_seat = &company.seat;
    let company_cpf = &company.cpf;
    let representative = &company.representative;
    let bank_instructions = &company.bank_instructions;

    format!(
        "**{company_name}**\n\
         \n\
         **CONTRATANTE:** {client_name}, CPF/CNPJ: n°{client_cpf}, \
         RG: nº {client_rg} residente em Rua: {client_address}.\n\
         \n\
         **CONTRATADA:** {company_name}, {company_seat}, inscrita no CPF \
         sob o nº {company_cpf}, neste ato representada pelo Responsável \
         Sr. {representative}.\n\
         \n\
         As partes acima identificadas têm, entre si, justo e acertado o \
         presente Contrato de Prestação de Serviços de Rodizio de pizza \
         para festa, que se regerá pelas cláusulas seguintes e pelas \
         condições de preço, forma e termo de pagamento descritas no \
         presente.\n\
         \n\
         **DO OBJETO DO CONTRATO**\n\
         \n\
         **Cláusula 1ª.** É objeto do presente contrato a prestação pela \
         CONTRATADA à CONTRATANTE do serviço de rodizio de pizza, em \
         evento que se realizará na data de {event_date}, no endereço / \
         local: {event_address}.\n\
         \n\
         **O EVENTO**\n\
         \n\
         **Cláusula 2ª.** O evento, para cuja realização são contratados \
         os serviços de Rodizio de Pizza, é a festa de confraternização \
         da CONTRATANTE, e contará com a presença de aproximadamente \
         {adults} adultos{children_guests} a serem confirmada uma semana \
         antes do evento.\n\
         **Parágrafo único.** O evento realizar-se-á no horário e local \
         indicado no caput da cláusula 1ª, devendo o serviço de rodizio \
         de pizza a ser prestado das {starts_at} até às {ends_at} \
         horas.\n\
         \n\
         **OBRIGAÇÕES DA CONTRATANTE**\n\
         \n\
         **Cláusula 3ª.** A CONTRATANTE deverá fornecer à CONTRATADA \
         todas as informações necessárias à realização adequada do \
         serviço de rodizio de pizza, devendo especificar os detalhes do \
         evento, necessários ao perfeito fornecimento do serviço, e a \
         forma como este deverá ser prestado.\n\
         \n\
         **Cláusula 4ª.** A CONTRATANTE deverá efetuar o pagamento na \
         forma e condições estabelecidas na cláusula 9ª.\n\
         \n\
         **OBRIGAÇÕES DA CONTRATADA**\n\
         \n\
         **Cláusula 5ª.** É dever da CONTRATADA oferecer um serviço de \
         rodizio pizza de acordo com as especificações da CONTRATANTE, \
         devendo o serviço iniciar-se às {starts_at} e terminar às \
         {ends_at} horas. **Parágrafo único.** A CONTRATADA está \
         obrigada a fornecer aos convidados do CONTRATANTE produtos de \
         alta qualidade, que deverão ser preparados e servidos dentro de \
         rigorosas normas de higiene e limpeza. Obs: O excedente de \
         horário será cobrado 300,00 (trezentos reais) a cada meia hora \
         do horário ultrapassado.\n\
         \n\
         **Cláusula 6ª.** A CONTRATADA se compromete a fornecer o \
         cardápio escolhido pela CONTRATANTE, cujas especificações, \
         inclusive de quantidade a ser servida, encontram-se em \
         documento anexo ao presente contrato.\n\
         \n\
         **Cláusula 7ª.** A CONTRATADA fornecerá pelo menos 1 pizzaiolos \
         e {waiters} para servir os convidados nas mesas.\n\
         \n\
         **Cláusula 8ª.** A CONTRATADA obriga-se a manter todos os seus \
         empregados devidamente uniformizados durante a prestação dos \
         serviços ora contratados, garantindo que todos eles possuem os \
         requisitos de urbanidade, moralidade e educação.\n\
         \n\
         **DO PREÇO E DAS CONDIÇÕES DE PAGAMENTO**\n\
         \n\
         **Cláusula 9.** O serviço contratado no presente instrumento \
         será remunerado dependendo do numero de pessoas confirmadas uma \
         semana antes do evento. A contratada garante que a quantidade \
         de comida seja suficiente para atender o num de pessoas \
         presentes, estando preparada para atender até 10% a mais do \
         numero de pessoas confirmadas, cobrando o valor de {per_adult} \
         por adulto{child_price}{extra_waiters} no total de {total} \
         assim como combinado pelo telefone. O serviço deve ser pago em \
         dinheiro, com uma entrada de {down_payment} \
         ({bank_instructions}) ANTECIPADO, a diferença no ato da festa \
         no valor de {remaining}.\n\
         \n\
         **Cláusula 10.** O presente contrato poderá ser rescindido \
         unilateralmente por qualquer uma das partes, desde que haja \
         comunicação formal por escrito justificando o motivo. Deverá \
         acontecer, além disso, até 10 dias corridos, antes da data \
         prevista para o evento, com devolução da entrada. Caso o \
         cliente queira ou precise cancelar ou mudar a data da reserva, \
         após ter pago a entrada, a contratada descontará o valor pago \
         na futura contratação do serviço se acontecer nos primeiros 30 \
         dias corridos após o dia antecipadamente reservado."
    )
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::{ClockTime, Money};

    use crate::{
        domain::contract::{
            Address, Client, ClientName, Contract, Cpf, Event, EventDate,
            Headcount, PriceList, Rg,
        },
        Company,
    };

    use super::narrative;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    fn contract(headcount: Headcount) -> Contract {
        Contract::new(
            Client {
                name: ClientName::new("Maria da Silva").unwrap(),
                cpf: Cpf::new("123.456.789-09").unwrap(),
                rg: Rg::new("12.345.678-9").unwrap(),
                address: Address::new("das Flores, 42, Londrina").unwrap(),
            },
            Event::schedule(
                EventDate::new("15/06/2025").unwrap(),
                Address::new("Av. Paraná, 100, Londrina").unwrap(),
                ClockTime::new(20, 30).unwrap(),
            ),
            headcount,
            PriceList {
                per_adult: money("55"),
                per_child: money("27"),
                per_extra_waiter: money("120"),
            },
        )
    }

    fn headcount(adults: u32, children: u32, extra_waiters: u32) -> Headcount {
        Headcount {
            adults,
            children,
            extra_waiters,
        }
    }

    #[test]
    fn upper_cases_identity_fields_in_output_only() {
        let contract = contract(headcount(25, 0, 0));
        let text = narrative(&contract, &Company::default());

        assert!(text.contains("MARIA DA SILVA"));
        assert!(text.contains("AV. PARANÁ, 100, LONDRINA"));
        // The stored record keeps its casing.
        assert_eq!(
            AsRef::<str>::as_ref(&contract.client.name),
            "Maria da Silva",
        );
    }

    #[test]
    fn children_clause_appears_iff_children_present() {
        let company = Company::default();

        let without = narrative(&contract(headcount(25, 0, 0)), &company);
        assert!(without.contains("25 adultos a serem confirmada"));
        assert!(!without.contains("crianças a serem confirmada"));
        assert!(!without.contains("por crianças"));

        let with = narrative(&contract(headcount(25, 10, 0)), &company);
        assert!(with.contains("25 adultos e 10 crianças a serem confirmada"));
        assert!(with.contains("e R$ 27,00 por crianças"));
    }

    #[test]
    fn extra_waiters_fragment_appears_iff_extras_present() {
        let company = Company::default();

        let without = narrative(&contract(headcount(25, 0, 0)), &company);
        assert!(without.contains("1 garçons para servir"));
        assert!(!without.contains("garçons adicionais"));

        let with = narrative(&contract(headcount(25, 0, 2)), &company);
        assert!(with.contains("1 garçons + 2 garçons adicionais"));
        assert!(with.contains(
            ", mais 2 garçons adicionais no valor de R$ 120,00 cada \
             (total de R$ 240,00)"
        ));
    }

    #[test]
    fn remaining_balance_is_total_minus_down_payment() {
        let contract = contract(headcount(25, 0, 0));
        let text = narrative(&contract, &Company::default());

        assert!(text.contains("no total de R$ 1.375,00"));
        assert!(text.contains("uma entrada de R$ 550,00"));
        assert!(text.contains("no valor de R$ 825,00"));
    }

    #[test]
    fn embeds_service_hours() {
        let text =
            narrative(&contract(headcount(25, 0, 0)), &Company::default());

        assert!(text.contains("das 20:30 até às 23:30 horas"));
        assert!(text.contains("iniciar-se às 20:30 e terminar às 23:30"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let contract = contract(headcount(30, 5, 1));
        let company = Company::default();

        assert_eq!(
            narrative(&contract, &company),
            narrative(&contract, &company),
        );
    }

    #[test]
    fn keeps_cancellation_clause_as_prose() {
        let text =
            narrative(&contract(headcount(25, 0, 0)), &Company::default());

        assert!(text.contains("nos primeiros 30 dias corridos"));
    }

    #[test]
    fn strips_markers_from_client_input() {
        let mut contract = contract(headcount(25, 0, 0));
        contract.client.name =
            ClientName::new("Maria **destaque** da Silva").unwrap();

        let text = narrative(&contract, &Company::default());

        assert!(text.contains("MARIA DESTAQUE DA SILVA"));
    }
}
